//! # Store Process Locking
//!
//! Keeps two processes from writing the same cache file. Uses `fs2`
//! (flock on Unix, LockFile on Windows).

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::StoreError;

/// Exclusive lock on a store file, released on drop.
#[derive(Debug)]
pub struct StoreLock {
    file: File,
    path: PathBuf,
    pid: u32,
}

impl StoreLock {
    /// Acquire the lock file at `lock_path` without blocking.
    ///
    /// # Errors
    ///
    /// `StoreError::Locked` if another process holds it.
    pub fn acquire(lock_path: &Path) -> Result<Self, StoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(lock_path)?;

        if file.try_lock_exclusive().is_err() {
            return Err(StoreError::Locked {
                path: lock_path.to_path_buf(),
                pid: Self::read_existing_pid(lock_path),
            });
        }

        let pid = std::process::id();
        file.set_len(0)?;
        writeln!(file, "{}", pid)?;
        file.sync_all()?;

        Ok(Self {
            file,
            path: lock_path.to_path_buf(),
            pid,
        })
    }

    /// PID written into the lock file.
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Lock file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_existing_pid(path: &Path) -> Option<u32> {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
        let _ = std::fs::remove_file(&self.path);
    }
}
