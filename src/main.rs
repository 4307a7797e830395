use anyhow::Result;
use clap::Parser;

use audit_report::cli::handlers::{handle_classify, handle_generate};
use audit_report::cli::{Cli, Commands};
use audit_report::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file);

    match cli.command {
        Commands::Generate {
            source,
            metadata,
            out_file,
            stdout,
            badge_profile,
        } => handle_generate(&source, &metadata, &out_file, stdout, badge_profile.into()),
        Commands::Classify { source, json } => handle_classify(&source, json),
    }
}
