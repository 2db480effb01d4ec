//! Directory batch driver.
//!
//! Walks one directory (non-recursive), filters entries, and issues one transcriber
//! call per surviving file.

use std::fs;
use std::path::Path;

use crate::Result;
use crate::extensions::is_supported_media;
use crate::invocation::Invocation;
use crate::reporter::Reporter;
use crate::transcriber::Transcriber;

/// Counters for one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files handed to the transcriber that completed successfully.
    pub processed: usize,

    /// Entries filtered out (directories, disallowed extensions, skip-list hits).
    pub skipped: usize,

    /// Files the transcriber failed on.
    pub failed: usize,
}

/// Drives the external transcriber over every eligible file in a directory.
///
/// The driver owns the filtering and invocation-building policy only; *how*
/// transcription happens ([`Transcriber`]) and how events are surfaced ([`Reporter`])
/// are injected.
pub struct BatchDriver<T, R> {
    transcriber: T,
    reporter: R,
}

impl<T: Transcriber, R: Reporter> BatchDriver<T, R> {
    pub fn new(transcriber: T, reporter: R) -> Self {
        Self {
            transcriber,
            reporter,
        }
    }

    /// Transcribe every eligible file directly under `input_dir`.
    ///
    /// Per entry, in order:
    /// 1. subdirectories are skipped
    /// 2. disallowed extensions are skipped
    /// 3. skip-list suffix matches (against the full path) are skipped
    /// 4. survivors get a fresh [`Invocation`] and one transcriber call
    ///
    /// A transcriber failure on one file is reported, counted, and the loop continues
    /// with the next entry. Enumeration order is whatever the filesystem yields.
    pub fn process(
        &mut self,
        input_dir: &Path,
        forwarding_args: &[String],
        skip_files: &[String],
    ) -> Result<BatchSummary> {
        let mut summary = BatchSummary::default();

        for entry in fs::read_dir(input_dir)? {
            let path = entry?.path();

            if path.is_dir() {
                self.reporter.directory_skipped(&path);
                summary.skipped += 1;
                continue;
            }

            if !is_supported_media(&path) {
                self.reporter.extension_rejected(&path);
                summary.skipped += 1;
                continue;
            }

            if matches_skip_list(&path, skip_files) {
                self.reporter.skip_listed(&path);
                summary.skipped += 1;
                continue;
            }

            let invocation = Invocation::for_media(path.clone(), forwarding_args);
            self.reporter.transcribing(&invocation);

            match self.transcriber.transcribe(&invocation) {
                Ok(()) => summary.processed += 1,
                Err(err) => {
                    self.reporter.transcription_failed(&path, &err);
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }
}

/// Suffix match against the full path, as the user typed the token.
fn matches_skip_list(path: &Path, skip_files: &[String]) -> bool {
    let path = path.to_string_lossy();
    skip_files.iter().any(|token| path.ends_with(token.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn skip_list_matches_on_path_suffix() {
        let path = PathBuf::from("/videos/part_0004.mp4");

        assert!(matches_skip_list(&path, &["part_0004.mp4".to_string()]));
        assert!(matches_skip_list(&path, &["videos/part_0004.mp4".to_string()]));
        assert!(matches_skip_list(&path, &["0004.mp4".to_string()]));
        assert!(!matches_skip_list(&path, &["part_0005.mp4".to_string()]));
        assert!(!matches_skip_list(&path, &[]));
    }
}
