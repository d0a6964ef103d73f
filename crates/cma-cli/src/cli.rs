//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

const EXAMPLES: &str = "\
Examples:
  $ cma-tests -e dev
  $ cma-tests -e dev -r cli,json
  $ cma-tests -e dev -r cli -f admin";

/// Run the Charging Module API Postman collection with Newman
#[derive(Parser, Debug)]
#[command(name = "cma-tests")]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    /// Environment to run tests against
    #[arg(short, long, required_unless_present = "list")]
    pub environment: Option<String>,

    /// Reporters you wish newman to use
    #[arg(
        short,
        long,
        num_args = 1..,
        value_delimiter = ',',
        default_value = "cli",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub reporters: Vec<String>,

    /// Names of folders in the collection you wish newman to run
    #[arg(short, long, num_args = 1..)]
    pub folders: Vec<String>,

    /// Project directory holding the collections and environments/
    #[arg(long, env = "CMA_TESTS_ROOT")]
    pub root: Option<PathBuf>,

    /// Path to the newman executable
    #[arg(long, env = "NEWMAN_BIN")]
    pub newman: Option<PathBuf>,

    /// Print the resolved run configuration instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// List available environments
    #[arg(long, conflicts_with = "dry_run")]
    pub list: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
