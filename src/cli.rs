//! Command-line interface implementation for app-init.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for app-init.
#[derive(Parser, Debug)]
#[command(author, version, about = "app-init: set up a new app from its template", long_about = None)]
pub struct Args {
    /// Existing project directory to initialize
    #[arg(value_name = "APP_PATH")]
    pub app_path: PathBuf,

    /// Name of the project, used in messages
    #[arg(value_name = "APP_NAME")]
    pub app_name: String,

    /// Enable verbose logging and verbose npm output
    #[arg(short, long)]
    pub verbose: bool,

    /// Template directory to copy instead of the one installed in node_modules
    #[arg(short, long, value_name = "DIR")]
    pub template: Option<PathBuf>,

    /// JSON or YAML file (or directory containing app-init.json/.yml/.yaml)
    /// that replaces the built-in manifest defaults
    #[arg(short, long, value_name = "FILE")]
    pub defaults: Option<PathBuf>,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
