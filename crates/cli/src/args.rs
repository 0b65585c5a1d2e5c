use clap::{ArgAction, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

/// Normalize and merge Ethereum call request objects.
///
/// Call requests may carry their call data under `data` or the legacy `input` key. Output always
/// uses `data`.
#[derive(Debug, Parser)]
#[command(name = "callreq", version, next_display_order = None)]
pub struct Callreq {
    #[command(subcommand)]
    pub cmd: CallreqSubcommand,

    /// Pretty-print the JSON output.
    #[arg(long, global = true, env = "CALLREQ_PRETTY")]
    pub pretty: bool,

    /// Verbosity of the logs written to stderr. Ignored when `RUST_LOG` is set.
    ///
    /// Pass multiple times to increase the verbosity (e.g. -v, -vv, -vvv).
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Debug, Subcommand)]
pub enum CallreqSubcommand {
    /// Decode a call request and print its canonical encoding.
    #[command(visible_alias = "n")]
    Normalize {
        /// The JSON file to read, or `-` for stdin.
        #[arg(value_hint = ValueHint::FilePath)]
        path: Option<PathBuf>,
    },

    /// Merge call requests into one, later documents overriding earlier ones field by field.
    #[command(visible_alias = "m")]
    Merge {
        /// The JSON files to merge, in order. `-` reads stdin.
        #[arg(required = true, value_hint = ValueHint::FilePath)]
        paths: Vec<PathBuf>,
    },
}

impl Callreq {
    /// Default log directive for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
