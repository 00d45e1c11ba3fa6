use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show history [containing terms...]")]
    History {
        /// Number of lines to show (0 for all)
        #[arg(short = 'n', long = "limit", default_value = "0")]
        limit: usize,

        /// Show lines that match all given terms (quote to keep a phrase)
        #[arg(long = "match")]
        terms: Vec<String>,
    },

    #[command(about = "Clean up history")]
    HistoryClean,

    #[command(about = "Render JSON results as a readable listing")]
    Show {
        /// JSON file to read (stdin when omitted)
        file: Option<PathBuf>,

        /// Keys whose values form each item's header
        #[arg(long = "title", default_values = ["id", "name"])]
        title: Vec<String>,

        /// Number the items
        #[arg(long)]
        enumerate: bool,

        /// Keep header values in the item body too
        #[arg(long)]
        redundant: bool,

        /// Hold output every N items (0 uses the configured page size)
        #[arg(long)]
        page_size: Option<usize>,

        /// Keep records where KEY matches VALUE
        #[arg(long = "filter", value_name = "KEY=VALUE")]
        filters: Vec<String>,

        /// Require equal values instead of substring matches
        #[arg(long)]
        exact: bool,

        /// Compare filter values case-sensitively
        #[arg(long)]
        case_sensitive: bool,

        /// Keys (and list values) to leave out
        #[arg(long = "exclude", value_name = "KEY")]
        exclude: Vec<String>,

        /// Turn '_' in keys into spaces
        #[arg(long)]
        pretty_keys: bool,

        /// Write a plain indented dump of the result to FILE instead
        #[arg(long, value_name = "FILE")]
        save: Option<PathBuf>,
    },

    #[command(about = "Format a byte count with a readable unit")]
    Size {
        /// Byte count, or an amount with a unit such as 1.5GiB
        value: String,

        /// Use 1000-based units (KB, MB, ...)
        #[arg(long)]
        decimal: bool,
    },

    #[command(about = "Convert a size to a byte count")]
    ToBytes {
        /// Amount, optionally followed by its unit (e.g. 42MB)
        size: String,

        /// Unit for a bare amount
        unit: Option<String>,
    },

    #[command(about = "Guess the content type of a file name")]
    Mime {
        file: String,
    },

    #[command(about = "Measure the size of a file or directory")]
    Du {
        path: PathBuf,

        /// Use 1000-based units (KB, MB, ...)
        #[arg(long)]
        decimal: bool,
    },
}

impl Commands {
    /// Commands that read or reset the history are not recorded in it.
    pub fn is_history_command(&self) -> bool {
        matches!(self, Commands::History { .. } | Commands::HistoryClean)
    }
}
