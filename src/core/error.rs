/*!
Error handling for the hash registry.

Only registration and bootstrap can fail hard. Verification mismatches are
reported as outcomes, not errors; see [`crate::core::verify`].
*/

use std::io;
use thiserror::Error;

/// Result type for the hash registry
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the hash registry
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while writing a report
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Two descriptors normalize to the same name.
    ///
    /// This is the fatal startup path: callers are expected to abort.
    #[error("Hash names must be unique: \"{name}\" (\"{existing}\") was added multiple times")]
    DuplicateName {
        /// Name of the descriptor being registered
        name: String,
        /// Name of the descriptor already holding the normalized slot
        existing: String,
    },

    /// Descriptor failed construction-time validation
    #[error("Invalid hash descriptor \"{name}\": {reason}")]
    InvalidDescriptor {
        /// Name given to the builder
        name: String,
        /// What was wrong with it
        reason: String,
    },

    /// The descriptor's init hook reported failure
    #[error("Initialization failed for hash \"{name}\"")]
    InitFailed {
        /// Descriptor name
        name: String,
    },

    /// Verification configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Process-wide registry queried before `init_registry`
    #[error("Hash registry not initialized")]
    RegistryNotInitialized,

    /// `init_registry` called a second time
    #[error("Hash registry already initialized")]
    RegistryAlreadyInitialized,
}

impl Error {
    /// True for errors that must stop the process before any outcome is printed
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::DuplicateName { .. } | Error::InvalidDescriptor { .. })
    }
}

/// Convert a name and reason to an Error::InvalidDescriptor
pub fn descriptor_err<T, N: Into<String>, S: Into<String>>(name: N, reason: S) -> Result<T> {
    Err(Error::InvalidDescriptor {
        name: name.into(),
        reason: reason.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_message() {
        let err = Error::DuplicateName {
            name: "fnv1a-32".into(),
            existing: "FNV-1a-32".into(),
        };
        assert!(err.is_fatal());
        assert_eq!(
            err.to_string(),
            "Hash names must be unique: \"fnv1a-32\" (\"FNV-1a-32\") was added multiple times"
        );
    }

    #[test]
    fn test_descriptor_err_helper() {
        let result: Result<()> = descriptor_err("bad_name", "underscores are not allowed");
        match result {
            Err(Error::InvalidDescriptor { name, reason }) => {
                assert_eq!(name, "bad_name");
                assert_eq!(reason, "underscores are not allowed");
            }
            _ => panic!("Expected InvalidDescriptor error"),
        }
    }

    #[test]
    fn test_init_failed_is_not_fatal() {
        let err = Error::InitFailed { name: "crc-32".into() };
        assert!(!err.is_fatal());
    }
}
