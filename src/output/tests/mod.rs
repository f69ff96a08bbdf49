
use crate::error::EmailError;
use crate::output::{Digest, SendDigest};
use std::cell::RefCell;
use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// Directory under the system temp dir, removed again when dropped
pub(crate) struct ScratchDir(PathBuf);

impl Deref for ScratchDir {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for ScratchDir {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

/// Fresh scratch location; the directory itself is not created
pub(crate) fn scratch_dir(name: &str) -> ScratchDir {
    let dir = std::env::temp_dir().join(format!("job-yield-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    ScratchDir(dir)
}

/// Keeps every digest it is asked to send
#[derive(Default)]
pub(crate) struct RecordingMailer {
    pub sent: RefCell<Vec<Digest>>,
    pub fail: bool,
}

impl SendDigest for RecordingMailer {
    fn send(&self, digest: &Digest) -> Result<(), EmailError> {
        self.sent.borrow_mut().push(digest.clone());
        if self.fail {
            return Err(EmailError::MissingSecret("EMAIL_PASSWORD"));
        }
        Ok(())
    }
}
