use anyhow::Context;
use clap::Parser;
use scrypt_crack::cli::Args;
use scrypt_crack::{
    render_outcome, run_search, Mask, ScryptOracle, SearchReport, TargetCredential,
};
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[tokio::main]
async fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("Invalid arguments: {}", e);
        std::process::exit(1);
    }

    let target = TargetCredential::load(&args.hash_file)
        .with_context(|| format!("Error parsing file {}", args.hash_file.display()))?;

    let mask = Mask::parse(&args.mask)?;
    if args.strict_mask {
        mask.validate()?;
    }

    let config = args.search_config();
    let total = mask.search_space();

    if !args.json {
        println!("Scrypt bruteforce");
        println!("{}", "=".repeat(17));
        println!("Parameters: N={}, r={}, p={}", target.n, target.r, target.p);
        println!("Mask: {}", mask);
        println!("Total combinations: {}", total);
        println!("Workers: {}", config.workers);
        println!();
    }

    let oracle = ScryptOracle::new(target);
    if !oracle.params_valid() {
        debug!("scrypt rejects these parameters; no candidate can match");
    }

    let outcome = run_search(&mask, Arc::new(oracle), &config).await?;

    if args.json {
        println!("{}", SearchReport::new(&mask, total, &outcome).to_json()?);
    } else {
        println!("{}", render_outcome(&outcome));
    }

    Ok(())
}
