use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the EduPath REST API
    #[arg(long, env = "EDUPATH_API_URL", default_value = "http://127.0.0.1:8000/api")]
    pub api_url: String,

    /// Directory holding the saved comparison history
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Quiet period after the last keystroke before a search is sent
    #[arg(long, default_value_t = 300)]
    pub debounce_ms: u64,

    /// Shortest query that reaches the backend, shared by every search box
    #[arg(long, default_value_t = 2)]
    pub min_query_len: usize,

    /// Number of saved comparisons to keep
    #[arg(long, default_value = "20")]
    pub history_limit: NonZeroUsize,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the course catalog
    Search { query: String },
    /// Compare two or three courses by id
    Compare {
        #[arg(num_args = 2..=3, required = true)]
        ids: Vec<String>,
        /// Record the comparison in the history
        #[arg(long)]
        save: bool,
        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
    },
    /// List saved comparisons, most recent first
    History,
    /// Re-run a saved comparison
    Again {
        index: usize,
        #[arg(long)]
        json: bool,
    },
    /// Check a student's cluster points against a course
    Eligibility { course_id: String, points: f64 },
}
