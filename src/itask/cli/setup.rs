use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "itask", bin_name = "itask", version = get_version())]
#[command(about = "iTask - Manage your todos at one place", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding todos and config (defaults to $ITASK_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List todos
    #[command(alias = "ls")]
    List,

    /// Add a todo (longer than 3 characters)
    #[command(alias = "a")]
    Add {
        /// Text of the todo; words are joined with spaces
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Mark todos done, or not done again
    #[command(alias = "t", alias = "done")]
    Toggle {
        /// Indexes of the todos (e.g. 1 3 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Delete one or more todos
    #[command(alias = "rm")]
    Delete {
        /// Indexes of the todos (e.g. 1 3 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Re-enter a todo, optionally with new text (it moves to the end of the list)
    #[command(alias = "e")]
    Edit {
        /// Index of the todo
        index: String,

        /// Replacement text; keeps the current text if omitted
        #[arg(num_args = 0.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Show or set configuration
    Config {
        /// storage-key, log-level or log-format
        key: Option<String>,

        /// New value for the key
        value: Option<String>,
    },

    /// Print the path of the todo storage file
    Path,
}
