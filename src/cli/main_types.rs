use crate::storage::config::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rassist")]
#[command(about = "String helpers, environment introspection and test-support utilities")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split text on a literal pattern
    Split {
        /// Text to split
        text: String,
        /// Literal separator; the text is returned unchanged when omitted
        #[arg(short, long)]
        pattern: Option<String>,
        /// Print the fields as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Join fields with a separator
    Join {
        /// Separator inserted between fields
        #[arg(short, long)]
        separator: Option<String>,
        /// Fields to join
        fields: Vec<String>,
    },
    /// Compare two files byte by byte
    Compare {
        /// First file
        left: String,
        /// Second file
        right: String,
        /// Maximum number of differences to report
        #[arg(short, long, env = "RASSIST_MAX_DIFFERENCES")]
        max_differences: Option<usize>,
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// GoogleTest filter manipulation
    Filter {
        #[command(subcommand)]
        command: FilterCommands,
    },
    /// Environment introspection
    Env {
        #[command(subcommand)]
        command: EnvCommands,
    },
    /// Test fixture files
    Fixture {
        #[command(subcommand)]
        command: FixtureCommands,
    },
    /// GoogleTest executables
    Tests {
        #[command(subcommand)]
        command: TestsCommands,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum FilterCommands {
    /// Split a filter into its positive and negative parts
    Split {
        /// Filter in positive[-negative] format
        filter: String,
    },
    /// Merge positive and negative test lists into a filter
    Merge {
        #[arg(long, default_value = "")]
        positive: String,
        #[arg(long, default_value = "")]
        negative: String,
        /// Existing filter to extend
        #[arg(long)]
        existing: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum EnvCommands {
    /// Print the value of an environment variable
    Get {
        /// Variable name
        name: String,
    },
    /// Show process and build information
    Info,
}

#[derive(Subcommand, Debug)]
pub enum FixtureCommands {
    /// Create a file of sequential bytes, or a text file when no size is given
    Create {
        path: String,
        /// Size in bytes
        #[arg(short, long)]
        size: Option<u64>,
    },
    /// Overwrite a single byte
    Patch {
        path: String,
        offset: u64,
        /// Byte value, decimal or 0x-prefixed hex
        value: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TestsCommands {
    /// List the test cases of a GoogleTest executable
    List {
        /// Path to the executable
        executable: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key (max-differences, output-format)
        key: String,
        /// Configuration value
        value: String,
    },
}
