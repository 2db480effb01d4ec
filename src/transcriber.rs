use std::ffi::OsString;
use std::process::Command;

use tracing::debug;

use crate::invocation::Invocation;
use crate::{Error, Result};

/// Pluggable transcription boundary used by [`BatchDriver`](crate::batch::BatchDriver).
///
/// Implementations decide what "run the transcriber" means. The production
/// implementation ([`WhisperCli`]) spawns the external executable; tests substitute a
/// recording fake so the batch policy can be verified without child processes.
pub trait Transcriber {
    /// Run one transcription described by a structured [`Invocation`].
    fn transcribe(&mut self, invocation: &Invocation) -> Result<()>;

    /// Hand raw arguments to the external tool untouched (passthrough mode).
    fn forward(&mut self, args: &[String]) -> Result<()>;
}

impl<T: Transcriber + ?Sized> Transcriber for &mut T {
    fn transcribe(&mut self, invocation: &Invocation) -> Result<()> {
        (**self).transcribe(invocation)
    }

    fn forward(&mut self, args: &[String]) -> Result<()> {
        (**self).forward(args)
    }
}

/// Runs the external `whisper` executable as a blocking child process.
///
/// stdio is inherited, so the external tool's own output (progress, errors, help text)
/// reaches the terminal directly. Each call blocks until the child exits.
#[derive(Debug, Clone)]
pub struct WhisperCli {
    program: String,
}

impl WhisperCli {
    /// Drive the `whisper` executable found on `PATH`.
    pub fn new() -> Self {
        Self::with_program("whisper")
    }

    /// Drive an alternate executable (custom installs, tests).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The executable this instance spawns.
    pub fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, args: &[OsString]) -> Result<()> {
        debug!("Final command: {} {:?}", self.program, args);

        let status = Command::new(&self.program)
            .args(args)
            .status()
            .map_err(|source| Error::TranscriberSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(Error::TranscriberFailed { status });
        }

        Ok(())
    }
}

impl Default for WhisperCli {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcriber for WhisperCli {
    fn transcribe(&mut self, invocation: &Invocation) -> Result<()> {
        self.run(&invocation.to_args())
    }

    fn forward(&mut self, args: &[String]) -> Result<()> {
        let args: Vec<OsString> = args.iter().map(OsString::from).collect();
        self.run(&args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn forward_succeeds_when_the_child_exits_cleanly() {
        let mut cli = WhisperCli::with_program("true");
        cli.forward(&[]).expect("expected `true` to succeed");
    }

    #[cfg(unix)]
    #[test]
    fn forward_surfaces_a_non_zero_exit() {
        let mut cli = WhisperCli::with_program("false");
        let err = cli.forward(&[]).unwrap_err();
        match err {
            Error::TranscriberFailed { status } => assert_eq!(status.code(), Some(1)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn forward_surfaces_a_spawn_failure() {
        let mut cli = WhisperCli::with_program("whisk-test-no-such-program");
        let err = cli.forward(&[]).unwrap_err();
        match err {
            Error::TranscriberSpawn { program, .. } => {
                assert_eq!(program, "whisk-test-no-such-program");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
