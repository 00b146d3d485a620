use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};

/// Creates a test home directory under target/home with a random 8-character name
/// The directory will be automatically cleaned up when the returned guard is dropped
pub struct TestHomeGuard {
    path: PathBuf,
}

impl TestHomeGuard {
    pub fn new() -> Self {
        let random_name: String = rand::thread_rng()
            .sample_iter(&rand::distributions::Alphanumeric)
            .take(8)
            .map(char::from)
            .collect();

        let path = PathBuf::from("target/home").join(random_name);
        fs::create_dir_all(&path).expect("Failed to create test home directory");

        // TNCC_HOME must be absolute to be honoured
        let path = fs::canonicalize(&path).expect("Failed to canonicalize test home directory");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tncc_home(&self) -> PathBuf {
        self.path.join(".pulse_secure")
    }

    pub fn setup_tncc_structure(&self) -> &Self {
        fs::create_dir_all(self.tncc_home()).expect("Failed to create .pulse_secure directory");
        self
    }
}

impl Drop for TestHomeGuard {
    fn drop(&mut self) {
        if self.path.exists() {
            fs::remove_dir_all(&self.path).unwrap_or_else(|e| {
                eprintln!(
                    "Failed to cleanup test directory {}: {}",
                    self.path.display(),
                    e
                );
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_and_cleans_up_directory() {
        let test_path = {
            let guard = TestHomeGuard::new();
            let path = guard.path().to_path_buf();
            assert!(path.exists());
            assert!(path.is_absolute());
            assert!(path.to_string_lossy().contains("target/home"));
            path
        };
        assert!(!test_path.exists());
    }

    #[test]
    fn test_setup_tncc_structure() {
        let guard = TestHomeGuard::new();
        let guard = guard.setup_tncc_structure();

        assert!(guard.tncc_home().is_dir());
    }
}
