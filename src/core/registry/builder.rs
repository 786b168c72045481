/*!
Registry construction.

[`RegistryBuilder`] is the only mutable phase of the registry. It is driven
from a single thread at startup and consumed by [`RegistryBuilder::freeze`].
*/

use std::collections::HashMap;
use std::fmt;

use log::{debug, warn};

use crate::core::descriptor::{Endianness, HashDescriptor};
use crate::core::error::{Error, Result};

use super::{normalize_name, Registry};

/// Something about a registration worth reporting but not worth stopping for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryWarning {
    /// A second descriptor claims a nonzero verification value already seen
    DuplicateVerification {
        endian: Endianness,
        value: u32,
        name: String,
        existing: String,
    },
    /// CANONICAL_BOTH declared but the LE and BE values differ
    CanonicalMismatch { name: String, le: u32, be: u32 },
    /// LE and BE values are equal without CANONICAL_BOTH
    CoincidentalMatch { name: String, value: u32 },
}

impl fmt::Display for RegistryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryWarning::DuplicateVerification { endian, value, name, existing } => write!(
                f,
                "Hash \"{}\" has {} verification value 0x{:08X}, already seen in \"{}\"",
                name,
                endian.tag(),
                value,
                existing
            ),
            RegistryWarning::CanonicalMismatch { name, le, be } => write!(
                f,
                "Hash \"{}\" is CANONICAL_BOTH but LE 0x{:08X} != BE 0x{:08X}",
                name, le, be
            ),
            RegistryWarning::CoincidentalMatch { name, value } => write!(
                f,
                "Hash \"{}\" has equal LE and BE verification values 0x{:08X} without CANONICAL_BOTH",
                name, value
            ),
        }
    }
}

/// Accepts registrations until frozen
#[derive(Default)]
pub struct RegistryBuilder {
    descriptors: Vec<HashDescriptor>,
    by_name: HashMap<String, usize>,
    seen_le: HashMap<u32, usize>,
    seen_be: HashMap<u32, usize>,
    warnings: Vec<RegistryWarning>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor.
    ///
    /// Fails with [`Error::DuplicateName`] if its normalized name is taken;
    /// callers treat that as fatal. Duplicate verification values only warn.
    pub fn register(&mut self, descriptor: HashDescriptor) -> Result<()> {
        let key = normalize_name(descriptor.name());
        if let Some(&existing) = self.by_name.get(&key) {
            return Err(Error::DuplicateName {
                name: descriptor.name().to_string(),
                existing: self.descriptors[existing].name().to_string(),
            });
        }

        let index = self.descriptors.len();
        self.check_verification(&descriptor, index);
        debug!("Registered hash {} ({} bits)", descriptor.name(), descriptor.bits());

        self.by_name.insert(key, index);
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Register every descriptor from a factory, stopping at the first error
    pub fn register_all<I>(&mut self, descriptors: I) -> Result<()>
    where
        I: IntoIterator<Item = HashDescriptor>,
    {
        for descriptor in descriptors {
            self.register(descriptor)?;
        }
        Ok(())
    }

    fn check_verification(&mut self, descriptor: &HashDescriptor, index: usize) {
        let name = descriptor.name();
        let (le, be) = (descriptor.verification_le(), descriptor.verification_be());

        if descriptor.is_canonical_both() && le != be {
            self.warn(RegistryWarning::CanonicalMismatch { name: name.to_string(), le, be });
        } else if !descriptor.is_canonical_both() && le == be && le != 0 {
            self.warn(RegistryWarning::CoincidentalMatch { name: name.to_string(), value: le });
        }

        for (endian, value) in [(Endianness::Little, le), (Endianness::Big, be)] {
            if value == 0 {
                continue;
            }
            let seen = match endian {
                Endianness::Little => &mut self.seen_le,
                _ => &mut self.seen_be,
            };
            match seen.get(&value) {
                Some(&existing) => {
                    let existing = self.descriptors[existing].name().to_string();
                    self.warn(RegistryWarning::DuplicateVerification {
                        endian,
                        value,
                        name: name.to_string(),
                        existing,
                    });
                }
                None => {
                    seen.insert(value, index);
                }
            }
        }
    }

    fn warn(&mut self, warning: RegistryWarning) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// Warnings collected so far
    pub fn warnings(&self) -> &[RegistryWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// End the build phase; the result is read-only
    pub fn freeze(self) -> Registry {
        debug!("Freezing hash registry with {} entries", self.descriptors.len());
        Registry::from_parts(self.descriptors, self.warnings)
    }
}
