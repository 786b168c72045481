//! Build the hash registry, list it, and verify every hash.
//!
//! Exits 1 before printing any outcome if the catalog has a duplicate name,
//! and 1 after the report if any hash failed verification.

use std::io::{self, Write};
use std::process;

use hashreg::core::config::{env_flag, ENV_NAMES_ONLY};
use hashreg::{hashes, init_registry, VerifyConfig};

fn run() -> hashreg::Result<bool> {
    let registry = init_registry(hashes::BUILTIN)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    registry.list_hashes(&mut out, env_flag(ENV_NAMES_ONLY))?;
    writeln!(out)?;

    let passed = registry.verify_all_hashes(&mut out, &VerifyConfig::from_env())?;
    out.flush()?;
    Ok(passed)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
