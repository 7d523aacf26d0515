use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const STORAGE_BACKEND_ENV: &str = "GOLINK_STORAGE_BACKEND";
pub const STORE_PATH_ENV: &str = "GOLINK_STORE_PATH";
pub const OPENER_ENV: &str = "GOLINK_OPENER";
pub const SUGGEST_LIMIT_ENV: &str = "GOLINK_SUGGEST_LIMIT";
pub const LOG_FORMAT_ENV: &str = "GOLINK_LOG_FORMAT";

pub const DEFAULT_STORE_PATH: &str = "golinks.txt";
pub const DEFAULT_SUGGEST_LIMIT: &str = "5";
pub const DEFAULT_MODE: &str = "currentTab";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "file")]
    File,
    #[value(name = "in-memory")]
    InMemory,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::File => write!(f, "file"),
            StorageBackendArg::InMemory => write!(f, "in-memory"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "pretty")]
    Pretty,
    #[value(name = "json")]
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "golink", about = "Resolve and manage go links")]
pub struct CLI {
    #[arg(
        long,
        global = true,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::File
    )]
    pub storage: StorageBackendArg,

    #[arg(long, global = true, env = STORE_PATH_ENV, default_value = DEFAULT_STORE_PATH)]
    pub store_path: PathBuf,

    /// Program used to open destinations. Destinations are printed when unset.
    #[arg(long, global = true, env = OPENER_ENV)]
    pub opener: Option<String>,

    #[arg(long, global = true, env = SUGGEST_LIMIT_ENV, default_value = DEFAULT_SUGGEST_LIMIT)]
    pub suggest_limit: usize,

    #[arg(
        long,
        global = true,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Pretty
    )]
    pub log_format: LogFormatArg,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List go links matching a typeahead query.
    Suggest {
        #[arg(default_value = "")]
        query: String,
        /// Overrides the configured suggestion limit.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Resolve an alias and open its destination.
    Go {
        alias: String,
        /// currentTab, newForegroundTab or newBackgroundTab.
        #[arg(long, default_value = DEFAULT_MODE)]
        mode: String,
    },
    /// Print the destination of an alias.
    Resolve { alias: String },
    /// Add or replace a go link.
    Add { alias: String, destination: String },
    /// Remove a go link.
    Remove { alias: String },
    /// Print every go link in the bulk text format.
    List,
    /// Replace every go link with the bulk text read from FILE or stdin.
    Import { file: Option<PathBuf> },
    /// Print a short hint listing a few aliases.
    Hint,
}
