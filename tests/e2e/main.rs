//! End-to-end tests for the `hubrelay` binary

use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};
use std::path::PathBuf;

pub mod browse;
pub mod config;

/// Test context that provides an isolated environment for each test
pub struct TestContext {
    pub temp: TempDir,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.child("config")).unwrap();
        Self { temp }
    }

    /// Path of the config file passed with `--config`
    pub fn config_path(&self) -> PathBuf {
        self.temp.child("hubrelay.yaml").to_path_buf()
    }

    pub fn write_config(&self, content: &str) {
        self.temp.child("hubrelay.yaml").write_str(content).unwrap();
    }

    /// Create a Command for running hubrelay with proper environment
    pub fn hubrelay(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("hubrelay").unwrap();
        cmd.current_dir(&self.temp);

        // Keep the developer's own config and credentials out of the test
        cmd.env("XDG_CONFIG_HOME", self.temp.child("config").path());
        cmd.env("HOME", self.temp.path());
        cmd.env("GITHUB_TOKEN", "");
        cmd.env_remove("HUBRELAY_API_URL");
        cmd.env_remove("PORT");
        cmd.env_remove("HUBRELAY_BIND");

        cmd
    }
}
