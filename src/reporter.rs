use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::Error;
use crate::invocation::Invocation;

/// Receives per-file events from the batch driver.
///
/// The driver does not log on its own: reporting is a collaborator, so tests can
/// capture exactly what the driver decided without depending on process-wide logger
/// state.
pub trait Reporter {
    /// A directory entry was skipped because it is itself a directory.
    fn directory_skipped(&mut self, path: &Path);

    /// A file was skipped because its extension is not in the allowed set.
    fn extension_rejected(&mut self, path: &Path);

    /// A file was skipped because it matched a skip-list token.
    fn skip_listed(&mut self, path: &Path);

    /// A file survived filtering and is about to be transcribed.
    fn transcribing(&mut self, invocation: &Invocation);

    /// The transcriber failed on one file; the batch continues.
    fn transcription_failed(&mut self, path: &Path, error: &Error);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn directory_skipped(&mut self, path: &Path) {
        (**self).directory_skipped(path);
    }

    fn extension_rejected(&mut self, path: &Path) {
        (**self).extension_rejected(path);
    }

    fn skip_listed(&mut self, path: &Path) {
        (**self).skip_listed(path);
    }

    fn transcribing(&mut self, invocation: &Invocation) {
        (**self).transcribing(invocation);
    }

    fn transcription_failed(&mut self, path: &Path, error: &Error) {
        (**self).transcription_failed(path, error);
    }
}

/// Logs batch events through `tracing`.
///
/// Skip severities: a subdirectory is warn, an ineligible extension is error, a
/// skip-list hit is the user's own request and stays at info.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn directory_skipped(&mut self, path: &Path) {
        warn!("Directory not allowed: {}", path.display());
    }

    fn extension_rejected(&mut self, path: &Path) {
        error!("File extension not allowed: {}", path.display());
    }

    fn skip_listed(&mut self, path: &Path) {
        info!("File skipped: {}", path.display());
    }

    fn transcribing(&mut self, invocation: &Invocation) {
        info!("Transcribing: {}", invocation.media.display());
        debug!("--output_dir set to {}", invocation.output_dir.display());
    }

    fn transcription_failed(&mut self, path: &Path, error: &Error) {
        error!("Transcription failed for {}: {error}", path.display());
    }
}
