//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a paramstore command running in the project directory.
    ///
    /// Colors and inherited log filters are disabled so output is stable.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("paramstore").expect("failed to find paramstore binary");
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("PARAMSTORE_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run `paramstore` with `args`.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run paramstore")
    }

    /// Shortcut for `paramstore init`.
    pub fn init(&self, stack_name: &str) -> Output {
        self.run(&["init", stack_name])
    }

    /// Shortcut for `paramstore synth`.
    pub fn synth(&self) -> Output {
        self.run(&["synth"])
    }

    /// Shortcut for `paramstore check`.
    pub fn check(&self) -> Output {
        self.run(&["check"])
    }

    /// Shortcut for `paramstore list --json`.
    pub fn list_json(&self) -> Output {
        self.run(&["list", "--json"])
    }

    /// Shortcut for `paramstore arn`.
    pub fn arn(&self, name: &str) -> Output {
        self.run(&["arn", name])
    }

    /// Shortcut for `paramstore lookup`.
    pub fn lookup(&self, name: &str) -> Output {
        self.run(&["lookup", name])
    }
}
