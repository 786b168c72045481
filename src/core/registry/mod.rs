/*!
Registry of hash descriptors.

The registry moves through three states: uninitialized (no instance), building
([`RegistryBuilder`] accepting registrations) and frozen ([`Registry`], read
only). A frozen registry is `Send + Sync` and serves lookups from any number
of threads without locking. There is no way back to the building state.
*/

pub mod builder;
pub mod manager;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::io::Write;

use crate::core::config::VerifyConfig;
use crate::core::descriptor::HashDescriptor;
use crate::core::error::Result;
use crate::core::report;

pub use builder::{RegistryBuilder, RegistryWarning};
pub use manager::{
    find_all_hashes, find_hash, get_registry, init_registry, install_registry, list_hashes,
    verify_all_hashes,
};

/// Produces the descriptors of one algorithm module
pub type DescriptorFactory = fn() -> Result<Vec<HashDescriptor>>;

/// Lookup key for a name: lowercase, with underscores read as dashes
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c == '_' { '-' } else { c.to_ascii_lowercase() })
        .collect()
}

/// Fallback lookup key: the normalized name with dashes removed
pub fn compact_name(name: &str) -> String {
    normalize_name(name).replace('-', "")
}

/// Build and freeze a registry from algorithm factories.
///
/// A duplicate name anywhere in the catalog fails the whole build.
pub fn build_registry(factories: &[DescriptorFactory]) -> Result<Registry> {
    let mut builder = RegistryBuilder::new();
    for factory in factories {
        builder.register_all(factory()?)?;
    }
    Ok(builder.freeze())
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Display order: mocks first (by sort order), then crypto, then family,
/// width, sort order and name.
pub fn display_order(a: &HashDescriptor, b: &HashDescriptor) -> Ordering {
    b.is_mock()
        .cmp(&a.is_mock())
        .then_with(|| {
            if a.is_mock() && b.is_mock() {
                a.sort_order().cmp(&b.sort_order())
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| b.is_crypto().cmp(&a.is_crypto()))
        .then_with(|| cmp_ignore_case(a.family(), b.family()))
        .then_with(|| a.bits().cmp(&b.bits()))
        .then_with(|| a.sort_order().cmp(&b.sort_order()))
        .then_with(|| a.name().cmp(b.name()))
}

/// Frozen catalog of hash descriptors
#[derive(Debug)]
pub struct Registry {
    descriptors: Vec<HashDescriptor>,
    by_name: HashMap<String, usize>,
    // None marks a compact key shared by several descriptors
    by_compact: HashMap<String, Option<usize>>,
    warnings: Vec<RegistryWarning>,
}

impl Registry {
    fn from_parts(mut descriptors: Vec<HashDescriptor>, warnings: Vec<RegistryWarning>) -> Self {
        descriptors.sort_by(display_order);
        let by_name = descriptors
            .iter()
            .enumerate()
            .map(|(i, d)| (normalize_name(d.name()), i))
            .collect();
        let mut by_compact = HashMap::new();
        for (i, d) in descriptors.iter().enumerate() {
            by_compact
                .entry(compact_name(d.name()))
                .and_modify(|slot| *slot = None)
                .or_insert(Some(i));
        }
        Self {
            descriptors,
            by_name,
            by_compact,
            warnings,
        }
    }

    /// Case-insensitive lookup; `_` matches `-`.
    ///
    /// If no name matches exactly, dashes are ignored as long as that leaves
    /// a single candidate.
    pub fn find_hash(&self, name: &str) -> Option<&HashDescriptor> {
        self.by_name
            .get(&normalize_name(name))
            .copied()
            .or_else(|| self.by_compact.get(&compact_name(name)).copied().flatten())
            .map(|i| &self.descriptors[i])
    }

    /// All descriptors in display order
    pub fn find_all_hashes(&self) -> &[HashDescriptor] {
        &self.descriptors
    }

    /// Advisory warnings raised while building
    pub fn warnings(&self) -> &[RegistryWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Write the hash table (or bare names) to `out`
    pub fn list_hashes<W: Write>(&self, out: &mut W, name_only: bool) -> Result<()> {
        report::write_hash_list(out, &self.descriptors, name_only)
    }

    /// Verify every descriptor, writing one line each; true if none failed
    pub fn verify_all_hashes<W: Write>(&self, out: &mut W, config: &VerifyConfig) -> Result<bool> {
        report::write_verification(out, &self.descriptors, config)
    }
}
