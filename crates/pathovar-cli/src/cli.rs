use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "pathovar",
    version,
    about = "Simplified ACMG evidence aggregator for human genomic variants (Ensembl VEP + ClinVar)"
)]
pub struct Args {
    /// Config file (defaults to $PATHOVAR_CONFIG, then ./pathovar.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify one variant given in HGVS notation
    Analyze {
        /// e.g. NM_007294.4:c.5137_5138insA
        variant: String,
        /// Print the full report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Also print the raw VEP status and response body
        #[arg(long, default_value_t = false)]
        show_raw: bool,
    },
    /// Serve the web interface and JSON API
    Serve {
        /// Listen address (overrides web.bind and $PATHOVAR_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Print the effective configuration
    Config,
}
