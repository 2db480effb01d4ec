// The `whisk` command-line surface: a passthrough subcommand that hands everything to
// the external whisper CLI, and a batch subcommand that issues one whisper call per
// eligible media file in a directory.
//
// Example commands:
//
// whisk whisper ~/videos/part_0004.mp4 --temperature 0 --beam_size 1 \
//   --output_format srt --model tiny --language pt --output_dir ~/videos/
//
// whisk batch --input_dir ~/videos/ --temperature 0 --model tiny --language pt \
//   -s intro.mp4 outro.mp4

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::info;

use whisk::Error;
use whisk::batch::BatchDriver;
use whisk::logging;
use whisk::reporter::TracingReporter;
use whisk::router;
use whisk::transcriber::{Transcriber, WhisperCli};

#[derive(Parser, Debug)]
#[command(name = "whisk", version)]
#[command(about = "Batch driver and passthrough wrapper for the whisper CLI")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Call the external `whisper` CLI directly.
    #[command(alias = "one", disable_help_flag = true)]
    Whisper {
        /// Show the external `whisper` help instead of this one.
        #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
        help: bool,

        /// Arguments handed to `whisper` untouched.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Process every eligible media file in a directory with `whisper`.
    ///
    /// Flags this tool consumes: `--input_dir <dir>` (required) and
    /// `-s/--skip_files <name>...`. Everything else is forwarded to `whisper`,
    /// except that `whisper`'s `--output_dir` is overridden per file so each
    /// transcript lands next to its source.
    Batch {
        /// Batch flags plus arguments forwarded to `whisper`.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let mut whisper = WhisperCli::new();

    match cli.command {
        Cmd::Whisper { help, args } => {
            let args = if help { vec!["--help".to_string()] } else { args };
            if let Err(err) = whisper.forward(&args) {
                exit_with_transcriber_error(err);
            }
        }
        Cmd::Batch { args } => {
            let request = router::route_batch(&args)?;

            info!("Batch processing: {}", request.input_dir.display());

            let mut driver = BatchDriver::new(whisper, TracingReporter);
            let summary =
                driver.process(&request.input_dir, &request.forwarded, &request.skip_files)?;

            info!(
                "Batch complete: {} processed, {} skipped, {} failed",
                summary.processed, summary.skipped, summary.failed
            );
        }
    }

    Ok(())
}

/// Passthrough mode mirrors the external tool's exit status.
fn exit_with_transcriber_error(err: Error) -> ! {
    match err {
        // The external tool already printed its own diagnostics.
        Error::TranscriberFailed { status } => std::process::exit(status.code().unwrap_or(1)),
        other => {
            eprintln!("{other}");
            std::process::exit(1);
        }
    }
}
