/*!
Built-in hash descriptors.

Each module exposes a `descriptors()` factory. [`BUILTIN`] lists them all in
the order program entry hands them to the registry.
*/

pub mod crc;
pub mod fnv;
pub mod mock;
pub mod sha;
pub mod siphash;

use crate::core::registry::DescriptorFactory;

/// Every built-in factory
pub const BUILTIN: &[DescriptorFactory] = &[
    mock::descriptors,
    fnv::descriptors,
    crc::descriptors,
    siphash::descriptors,
    sha::descriptors,
];
