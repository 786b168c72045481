/*!
Cross-endian verification.

Proves a descriptor reproduces its declared verification values under both
byte orders. One descriptor's failure never stops the rest of a pass.
*/

pub mod engine;
pub mod outcome;

pub use engine::{compare_verification, computed_verify, verify_descriptors, verify_hash};
pub use outcome::{FramingResult, HashStatus, HashVerification, VerifyOutcome};
