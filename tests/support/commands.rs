//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a ksd command isolated from the caller's environment.
    ///
    /// Returns a Command configured with:
    /// - Current directory set to the test directory
    /// - `KSD_LOG` and `KSD_OUTPUT` cleared
    /// - `NO_COLOR` set so stderr is plain text
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("ksd").expect("failed to find ksd binary");
        cmd.env_remove("KSD_LOG");
        cmd.env_remove("KSD_OUTPUT");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `ksd FILE`.
    pub fn decode_file(&self, name: &str) -> Output {
        self.cmd()
            .arg(name)
            .output()
            .expect("failed to run ksd")
    }

    /// Shortcut for `ksd` with `input` piped to stdin.
    pub fn decode_stdin(&self, input: &str) -> Output {
        self.cmd()
            .write_stdin(input)
            .output()
            .expect("failed to run ksd")
    }

    /// Shortcut for `ksd --output FORMAT` with `input` piped to stdin.
    pub fn decode_stdin_as(&self, format: &str, input: &str) -> Output {
        self.cmd()
            .args(["--output", format])
            .write_stdin(input)
            .output()
            .expect("failed to run ksd --output")
    }
}
