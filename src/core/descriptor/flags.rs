/*!
Typed capability sets for hash descriptors.

[`HashFlags`] describes what an algorithm *is* (seed width, crypto, mock,
which primitives it is built on). [`ImplFlags`] describes how this particular
implementation behaves (canonical byte order, operations used, speed, and
license).
*/

use std::fmt;
use std::ops::BitOr;

macro_rules! flag_set {
    ($(#[$meta:meta])* $name:ident { $($(#[$fmeta:meta])* $flag:ident = $bit:expr,)* }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Empty set
            pub const NONE: Self = Self(0);

            $(
                $(#[$fmeta])*
                pub const $flag: Self = Self(1 << $bit);
            )*

            const NAMES: &'static [(&'static str, Self)] = &[$((stringify!($flag), Self::$flag),)*];

            /// Check if every flag in `required` is set
            #[inline]
            #[must_use]
            pub const fn contains(self, required: Self) -> bool {
                (self.0 & required.0) == required.0
            }

            /// Check if any flag in `other` is set
            #[inline]
            #[must_use]
            pub const fn intersects(self, other: Self) -> bool {
                (self.0 & other.0) != 0
            }

            /// Union of two sets
            #[inline]
            #[must_use]
            pub const fn union(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }

            /// Intersection of two sets
            #[inline]
            #[must_use]
            pub const fn intersection(self, other: Self) -> Self {
                Self(self.0 & other.0)
            }

            /// True if no flag is set
            #[inline]
            #[must_use]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Names of the flags that are set, in declaration order
            pub fn names(self) -> impl Iterator<Item = &'static str> {
                Self::NAMES
                    .iter()
                    .filter(move |(_, f)| self.contains(*f))
                    .map(|(n, _)| *n)
            }
        }

        impl BitOr for $name {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                self.union(rhs)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(", stringify!($name))?;
                for (i, n) in self.names().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    f.write_str(n)?;
                }
                f.write_str(")")
            }
        }
    };
}

flag_set! {
    /// What an algorithm is
    HashFlags {
        /// Ignores its seed entirely
        NO_SEED = 0,
        /// Uses only the low 32 bits of the seed
        SMALL_SEED = 1,
        /// Expands the 64-bit seed into wider key material through its seed hook
        XL_SEED = 2,
        /// Declares one canonical output regardless of host byte order
        ENDIAN_INDEPENDENT = 3,
        /// Cryptographic hash
        CRYPTOGRAPHIC = 4,
        /// Non-production stand-in
        MOCK = 5,
        /// Built on AES rounds
        AES_BASED = 6,
        /// Built on CRC
        CRC_BASED = 7,
        /// Built on carry-less multiplication
        CLMUL_BASED = 8,
        /// Uses lookup tables
        LOOKUP_TABLE = 9,
        /// Uses floating-point arithmetic
        FLOATING_POINT = 10,
    }
}

flag_set! {
    /// How an implementation behaves
    ImplFlags {
        /// Canonical output is the little-endian framing
        CANONICAL_LE = 0,
        /// Canonical output is the big-endian framing
        CANONICAL_BE = 1,
        /// Both framings produce the same output from the same callable
        CANONICAL_BOTH = 2,
        /// Uses rotations
        ROTATE = 3,
        /// Uses multiplications
        MULTIPLY = 4,
        /// Supports incremental hashing
        INCREMENTAL = 5,
        /// Too slow for the full test suite
        VERY_SLOW = 6,
        /// Known to fail sanity tests
        SANITY_FAILS = 7,
        /// Public domain
        LICENSE_PUBLIC_DOMAIN = 16,
        /// BSD license
        LICENSE_BSD = 17,
        /// MIT license
        LICENSE_MIT = 18,
        /// Apache 2.0 license
        LICENSE_APACHE2 = 19,
        /// zlib license
        LICENSE_ZLIB = 20,
        /// GPL 3 license
        LICENSE_GPL3 = 21,
    }
}

/// License tag carried inside [`ImplFlags`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub enum License {
    PublicDomain,
    Bsd,
    Mit,
    Apache2,
    Zlib,
    Gpl3,
}

impl License {
    /// Short display name
    pub fn name(&self) -> &'static str {
        match self {
            License::PublicDomain => "Public Domain",
            License::Bsd => "BSD",
            License::Mit => "MIT",
            License::Apache2 => "Apache 2.0",
            License::Zlib => "zlib",
            License::Gpl3 => "GPL 3",
        }
    }
}

impl ImplFlags {
    const LICENSES: [(ImplFlags, License); 6] = [
        (ImplFlags::LICENSE_PUBLIC_DOMAIN, License::PublicDomain),
        (ImplFlags::LICENSE_BSD, License::Bsd),
        (ImplFlags::LICENSE_MIT, License::Mit),
        (ImplFlags::LICENSE_APACHE2, License::Apache2),
        (ImplFlags::LICENSE_ZLIB, License::Zlib),
        (ImplFlags::LICENSE_GPL3, License::Gpl3),
    ];

    /// The first license tag present, if any
    pub fn license(self) -> Option<License> {
        Self::LICENSES
            .iter()
            .find(|(flag, _)| self.contains(*flag))
            .map(|(_, license)| *license)
    }
}
