use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Describes one call into the external transcriber.
///
/// This struct represents *what* gets executed, not *how*: the batch driver builds one
/// `Invocation` per surviving file and hands it to a
/// [`Transcriber`](crate::transcriber::Transcriber). Only the process-boundary
/// implementation renders it into an argument vector, via [`Invocation::to_args`].
///
/// Each instance is built fresh for its file and never reused, so nothing leaks from
/// one file's invocation into the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The media file to transcribe. Always the first argument handed to the external
    /// tool.
    pub media: PathBuf,

    /// Arguments this tool did not recognize, passed through unchanged and in order.
    pub forwarded: Vec<String>,

    /// Where the external tool writes the transcript. Always the media file's own
    /// parent directory, so every transcript lands alongside its source.
    pub output_dir: PathBuf,

    /// Whether to append `--verbose False`.
    ///
    /// The external tool is verbose by default, which would drown this tool's own
    /// status lines. Suppressed unless the forwarding arguments already take an
    /// explicit position on verbosity.
    pub suppress_verbosity: bool,
}

impl Invocation {
    /// Build the invocation for one media file.
    ///
    /// The output directory is pinned to the file's parent; any `--output_dir` the user
    /// passed in batch mode has already been discarded by the router.
    pub fn for_media(media: impl Into<PathBuf>, forwarded: &[String]) -> Self {
        let media = media.into();
        let output_dir = media
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let suppress_verbosity = !forwarded.iter().any(|arg| arg == "--verbose");

        Self {
            media,
            forwarded: forwarded.to_vec(),
            output_dir,
            suppress_verbosity,
        }
    }

    /// Render the argument vector for the external CLI.
    ///
    /// Order is part of the contract: media path first, then the forwarded arguments
    /// verbatim, then the output-directory override, then the optional verbosity
    /// suppression.
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(self.forwarded.len() + 5);
        args.push(self.media.clone().into_os_string());
        args.extend(self.forwarded.iter().map(OsString::from));
        args.push(OsString::from("--output_dir"));
        args.push(self.output_dir.clone().into_os_string());

        if self.suppress_verbosity {
            args.push(OsString::from("--verbose"));
            args.push(OsString::from("False"));
        }

        args
    }
}
