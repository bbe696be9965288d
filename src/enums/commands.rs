use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::form_factor::FormFactor;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file for problems
    Validate,
    /// Run every analyzer against a URL and print the combined results
    Analyze {
        url: String,
        #[clap(short, long, value_enum, default_value_t = FormFactor::Desktop)]
        form_factor: FormFactor,
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the prioritized action plan for a saved analysis
    Issues {
        #[clap(short, long)]
        input: PathBuf,
    },
    /// Generate remediation tutorials for the top issues of a saved analysis
    Tutorials {
        #[clap(short, long)]
        input: PathBuf,
    },
    /// Serve the HTTP API
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
    },
}
