use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sitelint_core::config::{EngineConfig, discover_config, load_config};
use sitelint_core::error::SiteLintError;
use sitelint_core::report::render;
use sitelint_core::rules::catalog::SOURCES;
use sitelint_core::{AnalysisRequest, Analyzer, RULE_CATALOG_VERSION};

mod args;

const EXIT_BELOW_THRESHOLD: i32 = 1;
const EXIT_INVALID_INPUT: i32 = 2;

fn main() -> Result<()> {
    let args = args::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    if args.list_sources {
        print!("{}", list_sources());
        return Ok(());
    }

    let config = resolve_config(&args)?;
    let request = AnalysisRequest {
        site_url: args.url.clone().unwrap_or_default(),
        source_filter: args.source.clone(),
    };

    let result = match Analyzer::http(config)?.analyze(&request) {
        Ok(result) => result,
        Err(err @ SiteLintError::InvalidInput(_)) => {
            eprintln!("error: {err}");
            std::process::exit(EXIT_INVALID_INPUT);
        }
        Err(err) => return Err(err.into()),
    };

    let output = match args.format {
        args::OutputFormat::Json => serde_json::to_string_pretty(&result)? + "\n",
        args::OutputFormat::Text => render::render_text(&result),
    };

    match &args.out {
        Some(path) => std::fs::write(path, &output)?,
        None => print!("{output}"),
    }

    if args
        .fail_under
        .is_some_and(|threshold| result.overall_score < threshold)
    {
        std::process::exit(EXIT_BELOW_THRESHOLD);
    }
    Ok(())
}

/// File from `--config`, else `./sitelint.toml`, else defaults; flags win.
fn resolve_config(args: &args::Args) -> Result<EngineConfig> {
    let path = match &args.config {
        Some(path) => Some(path.clone()),
        None => discover_config(&std::env::current_dir()?),
    };
    let mut config = match path {
        Some(path) => load_config(&path)?,
        None => EngineConfig::default(),
    };

    if let Some(secs) = args.timeout {
        config.fetch.timeout_secs = secs;
    }
    if args.sequential {
        config.parallel = false;
    }
    debug!(?config, "configuration resolved");
    Ok(config)
}

fn list_sources() -> String {
    let mut out = format!("rule catalog {RULE_CATALOG_VERSION}\n");
    for s in SOURCES {
        out.push_str(&format!(
            "{:<16} {:>3} rules  {} ({})\n",
            s.id,
            s.rules().len(),
            s.name,
            s.organization
        ));
    }
    out
}
