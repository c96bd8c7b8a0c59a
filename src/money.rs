//! Fixed-point money type carried as integer minor units.
//!
//! All monetary values in the system (product prices, cart totals, order
//! amounts) are stored and computed as whole minor units (paise) in an `i64`.
//! This keeps arithmetic exact and makes the conversion to the gateway's
//! minor-unit integer representation a no-op instead of a lossy
//! floating-point multiply-and-round. Floats only appear at configuration
//! boundaries (seed files hold prices like `299.99`) and are validated on
//! the way in.

// `Result` is deliberately not imported unqualified here: the expansion of
// `DeriveValueType` refers to plain `Result` and must see the std prelude
// alias, not this crate's single-argument `errors::Result`.
use crate::errors::Error;
use sea_orm::DeriveValueType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;

/// Number of minor units per major unit (100 paise to the rupee).
const MINOR_PER_MAJOR: i64 = 100;

/// A monetary amount in whole minor units.
///
/// Stored directly in entity columns as a `BIGINT`; serialized transparently
/// as the raw minor-unit integer in JSON payloads.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    DeriveValueType,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero amount, the total of an empty cart.
    pub const ZERO: Self = Self(0);

    /// Wraps an amount already expressed in minor units.
    #[must_use]
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// The amount in minor units, as the gateway expects it.
    #[must_use]
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// The amount in whole major units, fraction truncated.
    ///
    /// Used for the simulated order id, which encodes the integer part of
    /// the cart total.
    #[must_use]
    pub const fn major_units(self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Whether this amount is exactly zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Converts a major-unit float (e.g. a `299.99` from config.toml) into
    /// minor units, rounding half away from zero.
    ///
    /// This is the only float-to-money conversion in the crate and it lives
    /// at the configuration boundary. Negative, non-finite, and
    /// out-of-range values are rejected.
    pub fn from_major_f64(major: f64) -> crate::errors::Result<Self> {
        if !major.is_finite() {
            return Err(Error::InvalidAmount { amount: major });
        }

        if major < 0.0 {
            return Err(Error::InvalidAmount { amount: major });
        }

        let minor = (major * 100.0).round();
        #[allow(clippy::cast_precision_loss)] // i64::MAX as f64 is an upper-bound check only
        if minor > i64::MAX as f64 {
            return Err(Error::InvalidAmount { amount: major });
        }

        #[allow(clippy::cast_possible_truncation)] // rounded and range-checked above
        let minor = minor as i64;
        Ok(Self(minor))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * i64::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    /// Formats as `major.cc`, e.g. `250.00` for 25000 minor units.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl FromStr for Money {
    type Err = Error;

    /// Parses decimal literals like `"123.45"`, `"123.4"`, or `"123"`.
    fn from_str(s: &str) -> crate::errors::Result<Self> {
        let invalid = || Error::Config {
            message: format!("invalid money literal: {s:?}"),
        };

        let (major_str, frac_str) = s.split_once('.').unwrap_or((s, ""));
        if major_str.is_empty() || frac_str.len() > 2 {
            return Err(invalid());
        }

        let major: i64 = major_str.parse().map_err(|_| invalid())?;
        if major < 0 {
            return Err(invalid());
        }

        let frac: i64 = if frac_str.is_empty() {
            0
        } else {
            // Right-pad so "4" means 40 minor units, not 4
            let padded = format!("{frac_str:0<2}");
            padded.parse().map_err(|_| invalid())?
        };

        Ok(Self(major * MINOR_PER_MAJOR + frac))
    }
}
