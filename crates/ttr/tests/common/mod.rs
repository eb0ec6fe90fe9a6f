//! Shared helpers for ttr integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;

/// Directory holding the sample texts. It has no `ttr.toml`, so commands
/// run here see default settings.
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
}

/// `ttr` run from [`data_dir`] with `RUST_LOG` cleared.
pub fn ttr_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ttr"));
    cmd.current_dir(data_dir()).env_remove("RUST_LOG");
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("utf-8 stdout")
}
