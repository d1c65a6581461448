//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a passmigrate command wired to the test store.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - PASSWORD_STORE_DIR set to the temporary store
    /// - the fake `pass` and `gpg` tools
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("passmigrate").expect("failed to find passmigrate binary");
        cmd.env("HOME", self.home.path());
        cmd.env("PASSWORD_STORE_DIR", self.store.path());
        cmd.env("PASSMIGRATE_PASS", self.tool("pass"));
        cmd.env("PASSMIGRATE_GPG", self.tool("gpg"));
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("PASSMIGRATE_BACKEND");
        cmd.env_remove("PASSMIGRATE_LOG");
        cmd.current_dir(self.home.path());
        cmd
    }

    /// Run a migration with the default backend.
    pub fn run(&self) -> Output {
        self.cmd().output().expect("failed to run passmigrate")
    }

    /// Run a migration with the gpg backend.
    pub fn run_gpg(&self) -> Output {
        self.cmd()
            .env("PASSMIGRATE_BACKEND", "gpg")
            .output()
            .expect("failed to run passmigrate")
    }
}
