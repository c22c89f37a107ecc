use std::{fmt, str::FromStr};

use crate::foundation::error::SeedcardError;

pub use kurbo::Point;

/// 32-bit identity of a deterministic run.
///
/// Signed inputs are reinterpreted bit-for-bit, and wider integers are reduced modulo 2^32, so
/// a seed minted by a JavaScript caller (`seed | 0`) maps onto the same stream here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seed(pub u32);

impl Seed {
    /// Reduce any integer modulo 2^32.
    pub const fn from_i64_wrapping(v: i64) -> Self {
        Self(v as u32)
    }

    /// Seed shifted by `delta` with 32-bit wraparound.
    pub const fn offset(self, delta: u32) -> Self {
        Self(self.0.wrapping_add(delta))
    }

    /// Raw bits viewed as a signed integer.
    pub const fn as_i32(self) -> i32 {
        self.0 as i32
    }
}

impl From<u32> for Seed {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl From<i32> for Seed {
    fn from(v: i32) -> Self {
        Self(v as u32)
    }
}

impl From<i64> for Seed {
    fn from(v: i64) -> Self {
        Self::from_i64_wrapping(v)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Seed {
    type Err = SeedcardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v: i64 = s
            .trim()
            .parse()
            .map_err(|e| SeedcardError::validation(format!("invalid seed \"{s}\": {e}")))?;
        Ok(Self::from_i64_wrapping(v))
    }
}

impl serde::Serialize for Seed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Seed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Unsigned(u64),
            Signed(i64),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Unsigned(v) => Ok(Self(v as u32)),
            Repr::Signed(v) => Ok(Self::from_i64_wrapping(v)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
