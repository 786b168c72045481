/*!
# hashreg

Infrastructure for a hash function test bench: a registry that lets many
heterogeneous hash algorithms be described, looked up and proven bit-exact
through one interface.

## Overview

- Endian-aware, alignment-agnostic integer codec
- Self-describing hash descriptors with typed capability flags
- A registry built once at startup, then frozen and shared read-only
- Cross-endian self-verification against compiled-in checksums

## Usage

```no_run
use hashreg::{hashes, init_registry, find_hash, verify_all_hashes};

init_registry(hashes::BUILTIN).expect("duplicate hash names");
let fnv = find_hash("fnv_1a_32").expect("registered");
assert_eq!(fnv.bits(), 32);
let all_passed = verify_all_hashes(false).unwrap();
```
*/

// Core components
pub mod core;

// Built-in algorithm catalog
pub mod hashes;

// Re-export commonly used types for convenience
pub use crate::core::error::{Error, Result};
pub use crate::core::config::VerifyConfig;
pub use crate::core::descriptor::{
    ByteOrder, Endianness, HashDescriptor, HashDescriptorBuilder, HashFlags, HashFn, ImplFlags,
    License, SeedMode, SeedState,
};
pub use crate::core::registry::{
    build_registry, find_all_hashes, find_hash, get_registry, init_registry, install_registry,
    list_hashes, normalize_name, verify_all_hashes, DescriptorFactory, Registry, RegistryBuilder,
    RegistryWarning,
};
pub use crate::core::verify::{
    compare_verification, computed_verify, verify_hash, HashStatus, HashVerification, VerifyOutcome,
};
