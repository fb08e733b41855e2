use assert_cmd::Command;
use std::path::Path;

pub fn jotter_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jotter").unwrap();
    cmd.env("JOTTER_DB", db_path);
    cmd.env_remove("EDITOR");
    cmd
}
