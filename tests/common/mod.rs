#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the check_wmi binary.
#[macro_export]
macro_rules! check_wmi {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("check_wmi"))
    };
}

/// Temporary directory holding config files and a scripted `wmic` stand-in.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file("check-wmi.toml", content)
    }

    /// Writes an executable shell script that answers WQL queries like `wmic`.
    ///
    /// `cases` is the body of a `case "$wql" in ... esac` block; each branch
    /// prints the raw client output with `cat <<'EOF'`. Every invocation's
    /// arguments are appended to `calls.log`, one per line.
    #[cfg(unix)]
    pub fn create_fake_wmic(&self, cases: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let log = self.dir.path().join("calls.log");
        let script = format!(
            "#!/bin/sh\n\
             printf '%s\\n' \"$@\" >> '{}'\n\
             for wql; do :; done\n\
             case \"$wql\" in\n{cases}\n\
             *) echo \"unexpected query: $wql\" >&2; exit 1 ;;\n\
             esac\n",
            log.display()
        );
        let path = self.create_file("wmic", &script);
        let mut perms = fs::metadata(&path).expect("Failed to stat script").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to chmod script");
        path
    }

    /// Arguments recorded by the fake client, one per line.
    pub fn calls(&self) -> String {
        fs::read_to_string(self.dir.path().join("calls.log")).unwrap_or_default()
    }
}

/// One `case` branch printing `output` when the WQL matches `pattern`.
pub fn reply(pattern: &str, output: &str) -> String {
    format!("{pattern})\ncat <<'EOF'\n{output}\nEOF\n;;")
}

/// One `case` branch failing like `wmic` does on an access error.
pub fn fail(pattern: &str, stderr: &str) -> String {
    format!("{pattern})\necho '{stderr}' >&2\nexit 1\n;;")
}
