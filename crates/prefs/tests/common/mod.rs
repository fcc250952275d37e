use std::{path::Path, process::Command};

/// Create a new prefs CLI command operating on the settings file at `file`
pub fn prefs(file: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_prefs"));
    cmd.env("PREFS_FILE", file).env_remove("PREFS_SUITE");
    cmd
}

/// Run the command and return its stdout, asserting that it succeeded
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to execute prefs command");
    assert!(
        output.status.success(),
        "Command should exit successfully: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}
