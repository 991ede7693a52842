//! Score bucketing: maps a raw regression score to one of six ordinal labels.
//!
//! A score is first rounded to one decimal place, then tested against a fixed
//! cascade of half-open intervals:
//!
//! ```text
//!   r ≤ -2.5          → -3
//!   -2.5 < r ≤ -1.5   → -2
//!   -1.5 < r ≤ -0.1   → -1
//!   -0.1 < r ≤  1.4   →  1
//!    1.4 < r ≤  2.4   →  2
//!    2.4 < r          →  3
//! ```
//!
//! The negative side steps by 1.0 while the positive side does not, and there
//! is no zero bucket: 0.0 lands in `+1`. These thresholds are load-bearing and
//! must not be symmetrised.
//!
//! # Invariants
//!
//! - Every finite input maps to exactly one label; no label is zero.
//! - NaN and ±infinity are rejected with [`DiagnoseError::InvalidInput`].
//! - Rounding acts on the exact stored value, like a correctly rounded
//!   decimal print; threshold tests then run on integer tenths.

use core::fmt;

use crate::error::{Axis, DiagnoseError, Result};

// ─── BucketLabel ────────────────────────────────────────────────────────────

/// Discrete ordinal category derived from a continuous score.
///
/// The domain is {-3, -2, -1, 1, 2, 3}. Zero does not exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i8", into = "i8"))]
pub enum BucketLabel {
    /// -3: strongest negative / furthest past.
    MinusThree,
    /// -2
    MinusTwo,
    /// -1
    MinusOne,
    /// +1: also where 0.0 lands.
    PlusOne,
    /// +2
    PlusTwo,
    /// +3: strongest positive / furthest future.
    PlusThree,
}

impl BucketLabel {
    /// All labels in ascending order.
    pub const ALL: [BucketLabel; 6] = [
        BucketLabel::MinusThree,
        BucketLabel::MinusTwo,
        BucketLabel::MinusOne,
        BucketLabel::PlusOne,
        BucketLabel::PlusTwo,
        BucketLabel::PlusThree,
    ];

    /// Signed integer value of this label.
    pub const fn value(self) -> i8 {
        match self {
            BucketLabel::MinusThree => -3,
            BucketLabel::MinusTwo => -2,
            BucketLabel::MinusOne => -1,
            BucketLabel::PlusOne => 1,
            BucketLabel::PlusTwo => 2,
            BucketLabel::PlusThree => 3,
        }
    }

    /// Offset of this label in [`BucketLabel::ALL`] (0..6). Used to index
    /// array-backed tables.
    pub const fn index(self) -> usize {
        match self {
            BucketLabel::MinusThree => 0,
            BucketLabel::MinusTwo => 1,
            BucketLabel::MinusOne => 2,
            BucketLabel::PlusOne => 3,
            BucketLabel::PlusTwo => 4,
            BucketLabel::PlusThree => 5,
        }
    }
}

impl TryFrom<i8> for BucketLabel {
    type Error = DiagnoseError;

    fn try_from(v: i8) -> Result<Self> {
        match v {
            -3 => Ok(BucketLabel::MinusThree),
            -2 => Ok(BucketLabel::MinusTwo),
            -1 => Ok(BucketLabel::MinusOne),
            1 => Ok(BucketLabel::PlusOne),
            2 => Ok(BucketLabel::PlusTwo),
            3 => Ok(BucketLabel::PlusThree),
            other => Err(DiagnoseError::InvalidBucket(other)),
        }
    }
}

impl From<BucketLabel> for i8 {
    fn from(b: BucketLabel) -> i8 {
        b.value()
    }
}

impl fmt::Display for BucketLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ─── Rounding ───────────────────────────────────────────────────────────────

/// Magnitude past which a score is bucketed by its sign alone.
const SATURATION: f64 = 1.0e15;

/// Fixed stack buffer for the one-decimal rendering of a score below
/// [`SATURATION`]: sign, 16 integer digits, point, one fraction digit.
struct TenthsBuf {
    bytes: [u8; 24],
    len: usize,
}

impl fmt::Write for TenthsBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self
            .len
            .checked_add(s.len())
            .filter(|&end| end <= self.bytes.len())
            .ok_or(fmt::Error)?;
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// Round `value` to one decimal place and return the result in tenths.
///
/// The exact binary value is rounded, not `value * 10.0`: 1.45 is stored as
/// 1.4499999… and yields 14. Exact ties (0.25, 0.75, …) go to the even
/// digit. `value` must be finite; magnitudes at or beyond [`SATURATION`]
/// saturate, which is harmless because they sit far past every threshold.
fn round_to_tenths(value: f64) -> i64 {
    let saturated = if value.is_sign_negative() { i64::MIN } else { i64::MAX };
    if value.abs() >= SATURATION {
        return saturated;
    }
    let mut buf = TenthsBuf { bytes: [0; 24], len: 0 };
    if fmt::write(&mut buf, format_args!("{:.1}", value)).is_err() {
        return saturated;
    }
    parse_tenths(&buf.bytes[..buf.len]).unwrap_or(saturated)
}

/// Parse `[-]digits.digit` into integer tenths. `"-0.0"` parses to 0.
fn parse_tenths(text: &[u8]) -> Option<i64> {
    let (negative, digits) = match text.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, text),
    };
    let mut tenths: i64 = 0;
    for &d in digits.iter().filter(|&&d| d != b'.') {
        if !d.is_ascii_digit() {
            return None;
        }
        tenths = tenths.checked_mul(10)?.checked_add(i64::from(d - b'0'))?;
    }
    Some(if negative { -tenths } else { tenths })
}

/// Bucket a rounded score expressed in tenths.
///
/// The guards mirror the interval table in the module docs one to one.
#[allow(clippy::manual_range_contains)]
fn bucket_tenths(r: i64) -> BucketLabel {
    if r <= -25 {
        BucketLabel::MinusThree
    } else if -25 < r && r <= -15 {
        BucketLabel::MinusTwo
    } else if -15 < r && r <= -1 {
        BucketLabel::MinusOne
    } else if -1 < r && r <= 14 {
        BucketLabel::PlusOne
    } else if 14 < r && r <= 24 {
        BucketLabel::PlusTwo
    } else if r > 24 {
        BucketLabel::PlusThree
    } else {
        BucketLabel::PlusOne
    }
}

/// Map a raw score to its bucket label.
///
/// Fails with [`DiagnoseError::InvalidInput`] (axis [`Axis::Unspecified`])
/// when `value` is NaN or infinite.
///
/// ```
/// use kansei_core::bucket::{round_bucket, BucketLabel};
///
/// assert_eq!(round_bucket(0.0).unwrap(), BucketLabel::PlusOne);
/// assert_eq!(round_bucket(-2.5).unwrap(), BucketLabel::MinusThree);
/// assert!(round_bucket(f64::NAN).is_err());
/// ```
pub fn round_bucket(value: f64) -> Result<BucketLabel> {
    if !value.is_finite() {
        tracing::warn!(value, "rejecting non-finite score");
        return Err(DiagnoseError::InvalidInput { axis: Axis::Unspecified, value });
    }
    Ok(bucket_tenths(round_to_tenths(value)))
}

// ─── Tests ──────────────────────────────────────────────────────────────────
