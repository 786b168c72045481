/*!
Process-wide registry instance.

Program entry builds the registry once with [`init_registry`]; after that the
free functions here query the frozen instance from any thread.
*/

use std::io::{self, Write};

use once_cell::sync::OnceCell;

use crate::core::config::VerifyConfig;
use crate::core::descriptor::HashDescriptor;
use crate::core::error::{Error, Result};

use super::{build_registry, DescriptorFactory, Registry};

// Global registry instance
static REGISTRY: OnceCell<Registry> = OnceCell::new();

/// Build the process-wide registry from algorithm factories
pub fn init_registry(factories: &[DescriptorFactory]) -> Result<&'static Registry> {
    if REGISTRY.get().is_some() {
        return Err(Error::RegistryAlreadyInitialized);
    }
    install_registry(build_registry(factories)?)
}

/// Install an already-built registry as the process-wide instance
pub fn install_registry(registry: Registry) -> Result<&'static Registry> {
    REGISTRY
        .set(registry)
        .map_err(|_| Error::RegistryAlreadyInitialized)?;
    get_registry()
}

/// Get the process-wide registry
pub fn get_registry() -> Result<&'static Registry> {
    REGISTRY.get().ok_or(Error::RegistryNotInitialized)
}

/// Look up a hash by name; not-found if the registry is not initialized
pub fn find_hash(name: &str) -> Option<&'static HashDescriptor> {
    REGISTRY.get().and_then(|r| r.find_hash(name))
}

/// All registered hashes in display order
pub fn find_all_hashes() -> Result<&'static [HashDescriptor]> {
    Ok(get_registry()?.find_all_hashes())
}

/// Print the hash table, or bare names, to stdout
pub fn list_hashes(name_only: bool) -> Result<()> {
    let registry = get_registry()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    registry.list_hashes(&mut out, name_only)?;
    out.flush()?;
    Ok(())
}

/// Verify every registered hash, printing to stdout; true if none failed
pub fn verify_all_hashes(verbose: bool) -> Result<bool> {
    let registry = get_registry()?;
    let config = VerifyConfig::default().with_verbose(verbose);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let passed = registry.verify_all_hashes(&mut out, &config)?;
    out.flush()?;
    Ok(passed)
}
