//! Companion utility: derive a scrypt record for a known password.
//!
//! ```bash
//! scrypt-gen --pass 42 -N 16384 -r 8 -P 1 -l 32 -o hash.txt
//! ```

use anyhow::Context;
use clap::Parser;
use scrypt_crack::cli::GenArgs;
use scrypt_crack::TargetCredential;
use tracing::info;
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

fn run() -> anyhow::Result<()> {
    let args = GenArgs::parse();

    if let Err(e) = args.validate() {
        eprintln!("Invalid arguments: {}", e);
        eprintln!("Usage: scrypt-gen --pass <password> [-N 16384] [-r 8] [-P 1] [-l 32] [-o file]");
        std::process::exit(1);
    }

    eprintln!("Generating scrypt hash...");
    eprintln!("Parameters: N={}, r={}, p={}, keyLen={}", args.n, args.r, args.p, args.key_len);

    let record =
        TargetCredential::generate(args.pass.as_bytes(), args.n, args.r, args.p, args.key_len)
            .context("Error computing hash")?;

    match &args.output {
        Some(path) => {
            record
                .save(path)
                .with_context(|| format!("Error writing file {}", path.display()))?;
            info!(path = %path.display(), "record written");
            println!("Hash saved to: {}", path.display());
        }
        None => println!("{}", record),
    }

    Ok(())
}
