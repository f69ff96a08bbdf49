pub mod email;
pub mod file;

#[cfg(test)]
pub(crate) mod tests;

pub use email::{Digest, EmailSettings, SendDigest, SmtpMailer};

use crate::results::JobRecord;
use chrono::Local;
use std::path::{Path, PathBuf};

/// What happened to a run's results
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Publication {
    /// Results file, if one was written
    pub file: Option<PathBuf>,
    /// Whether the digest email went out
    pub emailed: bool,
}

/// Writes the results file, then emails the digest.
///
/// Nothing happens for an empty run. The email is attempted whatever the
/// outcome of the file write, and a failure in either is logged, not returned.
pub fn publish(
    records: &[JobRecord],
    dir: &Path,
    file_name: &str,
    mailer: Option<&dyn SendDigest>,
) -> Publication {
    let mut publication = Publication::default();

    if records.is_empty() {
        ::log::warn!("No jobs extracted; skipping results file and email");
        return publication;
    }

    match file::save_results(dir, file_name, records) {
        Ok(Some(path)) => {
            ::log::info!("Saved {} jobs to {}", records.len(), path.display());
            publication.file = Some(path);
        }
        Ok(None) => {}
        Err(e) => ::log::error!("Failed to save results: {}", e),
    }

    let Some(mailer) = mailer else {
        ::log::info!("Email disabled; not sending a digest");
        return publication;
    };

    let digest = Digest::new(records, Local::now());
    match mailer.send(&digest) {
        Ok(()) => {
            ::log::info!("Email sent: {}", digest.subject);
            publication.emailed = true;
        }
        Err(e) => ::log::warn!("Failed to send email: {}", e),
    }

    publication
}
