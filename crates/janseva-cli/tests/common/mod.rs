use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated data dir + preconfigured binary invocation for one test.
pub struct TestFixture {
    data_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            data_dir: TempDir::new().expect("Failed to create temp data dir"),
        }
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("janseva").expect("Failed to find janseva binary");
        cmd.arg("--data-dir").arg(self.data_dir.path());
        cmd
    }

    /// Drop a config.toml with a citizen profile into the data dir.
    pub fn write_citizen_profile(&self, name: &str, phone: &str) {
        let content = format!("[citizen]\nname = \"{}\"\nphone = \"{}\"\n", name, phone);
        std::fs::write(self.data_dir.path().join("config.toml"), content)
            .expect("Failed to write config.toml");
    }
}
