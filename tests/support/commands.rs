//! Command helper methods for Test.

use super::{Test, PIN};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a foxhole command with the store path and PIN injected.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("foxhole").expect("failed to find foxhole binary");
        cmd.env("FOXHOLE_STORE", self.store_path());
        cmd.env("FOXHOLE_PIN", PIN);
        cmd
    }

    /// Same, but with a caller-chosen PIN.
    pub fn cmd_with_pin(&self, pin: &str) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("foxhole").expect("failed to find foxhole binary");
        cmd.env("FOXHOLE_STORE", self.store_path());
        cmd.env("FOXHOLE_PIN", pin);
        cmd
    }

    /// Shortcut for adding a git credential, secret piped over stdin.
    pub fn add_git(&self, name: &str, principal: &str, secret: &str) -> Output {
        self.cmd()
            .args(["add", "--kind", "git", "--name", name, "--principal", principal])
            .write_stdin(format!("{}\n", secret))
            .output()
            .expect("failed to run foxhole add")
    }

    /// Shortcut for adding an aws credential, secret piped over stdin.
    pub fn add_aws(&self, name: &str, principal: &str, secret: &str, region: &str) -> Output {
        self.cmd()
            .args([
                "add",
                "--kind",
                "aws",
                "--name",
                name,
                "--principal",
                principal,
                "--auxiliary",
                region,
            ])
            .write_stdin(format!("{}\n", secret))
            .output()
            .expect("failed to run foxhole add")
    }

    /// Shortcut for `foxhole list`.
    pub fn list(&self) -> Output {
        self.cmd().arg("list").output().expect("failed to run foxhole list")
    }

    /// Shortcut for `foxhole list --json`.
    pub fn list_json(&self) -> Output {
        self.cmd()
            .args(["list", "--json"])
            .output()
            .expect("failed to run foxhole list")
    }

    /// Shortcut for `foxhole rm --name <name> --yes`.
    pub fn rm_name(&self, name: &str) -> Output {
        self.cmd()
            .args(["rm", "--name", name, "--yes"])
            .output()
            .expect("failed to run foxhole rm")
    }

    /// Shortcut for `foxhole rm --index <i> --yes`.
    pub fn rm_index(&self, index: usize) -> Output {
        self.cmd()
            .args(["rm", "--index", &index.to_string(), "--yes"])
            .output()
            .expect("failed to run foxhole rm")
    }
}
