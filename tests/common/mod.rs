use assert_cmd::Command;

pub fn proxytag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("proxytag").unwrap();
    cmd.env_remove("PROXYTAG_METHODS");
    cmd.env_remove("RUST_LOG");
    cmd
}
