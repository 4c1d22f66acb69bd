//! pathovar — simplified ACMG evidence aggregator.
//! Entry point for the command-line and web front ends.

mod cli;
mod config;
mod render;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pathovar_classifier::AnalysisPipeline;
use pathovar_common::validate_variant_id;
use pathovar_sources::{ClinVarClient, VepClient};

use crate::cli::{Args, Command};
use crate::config::Config;

/// Both clients share one allow-listed HTTP client and its connection pool.
fn build_pipeline(config: &Config) -> anyhow::Result<AnalysisPipeline> {
    let http = config.sources.build_http_client()?;
    let vep = VepClient::with_client(http.clone(), &config.sources);
    let clinvar = ClinVarClient::with_client(http, &config.sources);
    Ok(AnalysisPipeline::new(
        Arc::new(vep),
        Arc::new(clinvar),
        config.classifier.clone(),
    ))
}

async fn run_analyze(config: &Config, variant: &str, json: bool, show_raw: bool) -> anyhow::Result<ExitCode> {
    let variant = match validate_variant_id(variant) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Expected HGVS notation such as {}", config.web.example_variant);
            return Ok(ExitCode::from(2));
        }
    };

    let pipeline = build_pipeline(config)?;
    let analysis = pipeline.analyze(&variant).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", render::render_text(&analysis, show_raw));
    }
    Ok(ExitCode::SUCCESS)
}

async fn run_serve(config: &Config, bind: Option<String>) -> anyhow::Result<ExitCode> {
    let bind = bind.unwrap_or_else(|| config.web.bind.clone());
    let addr: std::net::SocketAddr = bind
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address '{bind}': {e}"))?;

    let pipeline = build_pipeline(config)?;
    let state = pathovar_web::state::AppState::new(Arc::new(pipeline), config.web.example_variant.clone());
    let app = pathovar_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    // Logs go to stderr so `analyze --json` output stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pathovar=info,warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Command::Analyze { variant, json, show_raw } => {
            run_analyze(&config, &variant, json, show_raw).await
        }
        Command::Serve { bind } => run_serve(&config, bind).await,
        Command::Config => {
            print!("{}", config.to_redacted_toml()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ExitCode is compared through its Debug form.
    fn code(c: ExitCode) -> String {
        format!("{c:?}")
    }

    #[tokio::test]
    async fn test_invalid_variant_exits_with_usage_status() {
        let config = Config::default();
        for raw in ["BRCA1", "", "   ", "NM_007294.4: c.5123C>G"] {
            let exit = run_analyze(&config, raw, false, false).await.unwrap();
            assert_eq!(code(exit), code(ExitCode::from(2)), "{raw:?}");
        }
    }
}
