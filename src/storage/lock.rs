//! Advisory lock on the data directory, held for the duration of a write.

use crate::error::TodoError;
use fs2::FileExt;
use log::{debug, warn};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const LOCK_FILE: &str = ".lock";
const LOCK_TIMEOUT: Duration = Duration::from_secs(5);
const LOCK_RETRY_INTERVAL: Duration = Duration::from_millis(100);

pub struct StoreLock {
    _file: File,
    path: PathBuf,
}

impl StoreLock {
    /// Acquire the lock, retrying for up to five seconds. A lock file left by
    /// a process that no longer exists is removed first.
    pub fn acquire(data_dir: &Path) -> Result<Self, TodoError> {
        let path = data_dir.join(LOCK_FILE);
        remove_if_stale(&path);

        let start = Instant::now();
        loop {
            let mut file = File::create(&path).map_err(TodoError::LockError)?;
            match file.try_lock_exclusive() {
                Ok(()) => {
                    let _ = write!(file, "{}", std::process::id());
                    debug!("acquired store lock {}", path.display());
                    return Ok(Self { _file: file, path });
                }
                Err(_) if start.elapsed() < LOCK_TIMEOUT => {
                    std::thread::sleep(LOCK_RETRY_INTERVAL);
                }
                Err(e) => return Err(TodoError::LockError(e)),
            }
        }
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

fn remove_if_stale(path: &Path) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    let Ok(pid) = content.trim().parse::<u32>() else {
        return;
    };
    if !process_exists(pid) {
        warn!("removing stale lock left by pid {pid}");
        let _ = fs::remove_file(path);
    }
}

fn process_exists(pid: u32) -> bool {
    Path::new(&format!("/proc/{pid}")).exists()
}
