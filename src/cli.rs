use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "errcopy")]
#[command(
    author,
    version,
    about = "Turn raw error messages and validation payloads into user-facing copy"
)]
pub struct Cli {
    /// Enable verbose output with additional information
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Message catalog file (defaults to errcopy.toml when present)
    #[clap(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the user-facing copy for an error message
    Classify {
        /// Error message; multiple words are joined with spaces
        message: Vec<String>,

        /// Error kind tag, e.g. TypeError or AxiosError
        #[clap(short, long)]
        kind: Option<String>,

        /// Treat the input as a bare thrown string rather than an error object
        #[clap(long, default_value_t = false, conflicts_with = "json")]
        plain: bool,

        /// Parse the input as a JSON value (e.g. '{"message":"500"}' or '404')
        #[clap(long, default_value_t = false)]
        json: bool,
    },

    /// Summarize a validation error payload read from a file or stdin
    Validation {
        /// JSON file with the payload (reads stdin when omitted)
        file: Option<String>,

        /// Print every field with its messages instead of one summary line
        #[clap(long, default_value_t = false)]
        fields: bool,

        /// Print field errors as JSON (implies --fields)
        #[clap(long, default_value_t = false)]
        json: bool,
    },

    /// List the classification rules in evaluation order
    Rules,
}
