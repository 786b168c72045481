//! Core components of the hash registry.
//!
//! Byte codec, descriptors, the registry itself, verification, and reporting.

// Endian-aware integer access
pub mod codec;

// Hash descriptors and flag sets
pub mod descriptor;

// Name-keyed catalog
pub mod registry;

// Self-test verification
pub mod verify;

// Text reports
pub mod report;

// Run configuration
pub mod config;

// Protocol constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::config::VerifyConfig;
pub use self::descriptor::{ByteOrder, Endianness, HashDescriptor, HashFlags, ImplFlags, SeedMode, SeedState};
pub use self::error::{Error, Result};
pub use self::registry::{build_registry, Registry, RegistryBuilder, RegistryWarning};
