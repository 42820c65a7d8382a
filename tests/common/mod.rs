use assert_cmd::Command;

pub fn storytags_cmd() -> Command {
    let mut cmd = Command::cargo_bin("storytags").unwrap();
    cmd.env_remove("STORYTAGS_RULES");
    cmd.env_remove("RUST_LOG");
    cmd
}
