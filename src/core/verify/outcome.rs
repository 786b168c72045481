/*!
Verification outcomes.
*/

use std::fmt;

use crate::core::descriptor::Endianness;

/// Result of comparing one computed value against its expected value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub enum VerifyOutcome {
    /// Matches a known nonzero value
    Pass,
    /// Differs from a known value
    Fail { expected: u32 },
    /// No expected value is known yet
    Skip,
    /// Matches, but the value is zero
    Insecure,
}

impl VerifyOutcome {
    /// Only `Fail` counts against a run
    pub fn is_ok(&self) -> bool {
        !matches!(self, VerifyOutcome::Fail { .. })
    }

    /// Report text, in the style of the verbose self-test listing
    pub fn message(&self) -> String {
        match self {
            VerifyOutcome::Pass => "PASS".to_string(),
            VerifyOutcome::Fail { expected } => format!("FAIL!  (Expected 0x{:08x})", expected),
            VerifyOutcome::Skip => "SKIP (unverifiable)".to_string(),
            VerifyOutcome::Insecure => "INSECURE (should not be 0)".to_string(),
        }
    }
}

/// Computed value for one framing of one descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct FramingResult {
    pub endian: Endianness,
    pub expected: u32,
    pub actual: u32,
    pub outcome: VerifyOutcome,
}

/// Summary status of one descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub enum HashStatus {
    Pass,
    Fail,
    Skip,
    Insecure,
    InitFailed,
}

impl fmt::Display for HashStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HashStatus::Pass => "PASS",
            HashStatus::Fail => "FAIL",
            HashStatus::Skip => "SKIP",
            HashStatus::Insecure => "INSECURE",
            HashStatus::InitFailed => "INIT FAILED",
        };
        f.write_str(s)
    }
}

/// Verification of one descriptor across the requested framings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub enum HashVerification {
    /// `init` failed; no checksum was computed
    InitFailed { name: String },
    /// One result per requested framing
    Checked { name: String, framings: Vec<FramingResult> },
}

impl HashVerification {
    pub fn name(&self) -> &str {
        match self {
            HashVerification::InitFailed { name } | HashVerification::Checked { name, .. } => name,
        }
    }

    pub fn framings(&self) -> &[FramingResult] {
        match self {
            HashVerification::InitFailed { .. } => &[],
            HashVerification::Checked { framings, .. } => framings,
        }
    }

    /// Collapse the framings into one status
    pub fn status(&self) -> HashStatus {
        let framings = match self {
            HashVerification::InitFailed { .. } => return HashStatus::InitFailed,
            HashVerification::Checked { framings, .. } => framings,
        };
        let any = |pred: fn(&VerifyOutcome) -> bool| framings.iter().any(|r| pred(&r.outcome));
        if any(|o| matches!(o, VerifyOutcome::Fail { .. })) {
            HashStatus::Fail
        } else if any(|o| matches!(o, VerifyOutcome::Insecure)) {
            HashStatus::Insecure
        } else if any(|o| matches!(o, VerifyOutcome::Pass)) {
            HashStatus::Pass
        } else {
            HashStatus::Skip
        }
    }

    /// False on a failed init or any failed framing
    pub fn passed(&self) -> bool {
        !matches!(self.status(), HashStatus::Fail | HashStatus::InitFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn framing(outcome: VerifyOutcome) -> FramingResult {
        FramingResult {
            endian: Endianness::Little,
            expected: 1,
            actual: 1,
            outcome,
        }
    }

    fn checked(outcomes: &[VerifyOutcome]) -> HashVerification {
        HashVerification::Checked {
            name: "h".into(),
            framings: outcomes.iter().copied().map(framing).collect(),
        }
    }

    #[test]
    fn test_status_precedence() {
        use VerifyOutcome::*;
        assert_eq!(checked(&[Pass, Fail { expected: 3 }]).status(), HashStatus::Fail);
        assert_eq!(checked(&[Pass, Insecure]).status(), HashStatus::Insecure);
        assert_eq!(checked(&[Skip, Pass]).status(), HashStatus::Pass);
        assert_eq!(checked(&[Skip, Skip]).status(), HashStatus::Skip);
        assert_eq!(
            HashVerification::InitFailed { name: "h".into() }.status(),
            HashStatus::InitFailed
        );
    }

    #[test]
    fn test_passed() {
        use VerifyOutcome::*;
        assert!(checked(&[Pass, Insecure, Skip]).passed());
        assert!(!checked(&[Pass, Fail { expected: 3 }]).passed());
        assert!(!HashVerification::InitFailed { name: "h".into() }.passed());
    }

    #[test]
    fn test_messages() {
        assert_eq!(VerifyOutcome::Fail { expected: 0xabc }.message(), "FAIL!  (Expected 0x00000abc)");
        assert_eq!(VerifyOutcome::Insecure.message(), "INSECURE (should not be 0)");
        assert_eq!(HashStatus::InitFailed.to_string(), "INIT FAILED");
    }
}
