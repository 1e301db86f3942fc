//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Send MozDef events using the shared mozdef_client_config.conf
#[derive(Parser)]
#[command(
    name = "mozdef-event",
    version,
    about = "Send MozDef events using the shared mozdef_client_config.conf",
    long_about = "Reads the MozDef endpoint and delivery toggles from the first usable \
                  mozdef_client_config.conf (./, /usr/local/etc/, /etc/) and sends events."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to probe instead of the default search path (repeatable, in order)
    #[arg(long, short = 'c', global = true)]
    pub config: Vec<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Write debug logs to daily-rotated files in this directory instead of stderr
    #[arg(long, global = true, requires = "debug")]
    pub log_dir: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Send one event (a no-op when send_events is off)
    Send {
        /// Event summary
        #[arg(long, short = 's')]
        summary: String,

        /// Event category (lower-cased)
        #[arg(long)]
        category: Option<String>,

        /// Event source
        #[arg(long)]
        source: Option<String>,

        /// Severity name (DEBUG, INFO, NOTICE, WARNING, ERROR, CRITICAL, ALERT, EMERGENCY)
        #[arg(long)]
        severity: Option<String>,

        /// Tag to attach (repeatable)
        #[arg(long = "tag", short = 't')]
        tags: Vec<String>,

        /// Detail as KEY=VALUE; VALUE is parsed as JSON when possible (repeatable)
        #[arg(long = "detail", short = 'd')]
        details: Vec<String>,
    },
    /// Resolve and validate configuration, then print the settings
    Check,
    /// Generate a sample configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,

        /// MozDef endpoint to write into the file
        #[arg(long)]
        url: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Display version information
    Version,
}
