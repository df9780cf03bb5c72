use std::io::{Read, Write};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use predictions_normalizer::config::Config;
use predictions_normalizer::error::Result;
use predictions_normalizer::normalize::normalize_document;

fn main() {
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    // stdout carries the normalized JSON; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cfg) {
        error!("Normalization failed: {e}");
        std::process::exit(1);
    }
}

fn run(cfg: &Config) -> Result<()> {
    let raw = match &cfg.input_path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let source = cfg.input_path.as_deref().unwrap_or("stdin");
    info!(kind = %cfg.kind, source, bytes = raw.len(), "Read input document");

    let doc: serde_json::Value = serde_json::from_str(&raw)?;
    let out = normalize_document(cfg.kind, doc)?;

    let rendered = if cfg.pretty {
        serde_json::to_string_pretty(&out)?
    } else {
        serde_json::to_string(&out)?
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
