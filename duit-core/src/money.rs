//! Whole-rupiah amounts.
//!
//! The rupiah has no minor unit in day-to-day use, so amounts are kept as
//! integer rupiah. Sums never drift the way float accumulation does.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// An amount of Indonesian rupiah. Signed so a balance can go negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupiah(i64);

impl Rupiah {
    pub const ZERO: Rupiah = Rupiah(0);

    /// Largest amount a single message may record: one quadrillion rupiah.
    pub const MAX_ENTRY: Rupiah = Rupiah(1_000_000_000_000_000);

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Round a parsed magnitude to whole rupiah.
    ///
    /// Returns `None` for NaN, infinities and anything outside the `i64` range.
    pub fn from_magnitude(magnitude: f64) -> Option<Self> {
        if !magnitude.is_finite() {
            return None;
        }
        let rounded = magnitude.round();
        if rounded >= i64::MAX as f64 || rounded <= i64::MIN as f64 {
            return None;
        }
        Some(Self(rounded as i64))
    }

    pub const fn value(&self) -> i64 {
        self.0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Fits in a single recorded transaction
    pub const fn is_valid_entry(&self) -> bool {
        self.0 > 0 && self.0 <= Self::MAX_ENTRY.0
    }
}

// Arithmetic saturates at the i64 bounds instead of overflowing.

impl Add for Rupiah {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Rupiah {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Rupiah {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Rupiah {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Rupiah> for Rupiah {
    fn sum<I: Iterator<Item = &'a Rupiah>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + *x)
    }
}

/// Indonesian style: `Rp 1.500.000`, `-Rp 50.000`.
impl fmt::Display for Rupiah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        if self.0 < 0 {
            write!(f, "-Rp {}", grouped)
        } else {
            write!(f, "Rp {}", grouped)
        }
    }
}
