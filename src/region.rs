//! Region classification over the 2D (time × valence) plane split into named quadrants.
//!
//! ```text
//!             │ x ≤ -2        │ -1 ≤ x ≤ 1       │ x ≥ 2
//! ────────────┼───────────────┼──────────────────┼────────────────
//! y > 0       │ PastPositive  │ PresentPositive  │ FuturePositive
//! y < 0       │ PastNegative  │ PresentNegative  │ FutureNegative
//! y == 0      │ PastNeutral   │ PresentNeutral   │ FutureNeutral
//! ```
//!
//! Guards are evaluated in the order future → present → past, with
//! [`Quadrant::Unclassifiable`] as the final fallback. Because a
//! [`BucketLabel`] is never zero, the neutral row is unreachable from
//! [`classify`]; it stays part of the contract so the label domain can grow.

use core::fmt;
use core::str::FromStr;

use crate::bucket::BucketLabel;
use crate::error::DiagnoseError;

// ─── Era / Tone ─────────────────────────────────────────────────────────────

/// Temporal column of the plane (x axis).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Era {
    /// x ≤ -2.
    Past,
    /// -1 ≤ x ≤ 1.
    Present,
    /// x ≥ 2.
    Future,
}

impl Era {
    /// Bucket labels on the x axis that belong to this era, ascending.
    pub const fn x_labels(self) -> [BucketLabel; 2] {
        match self {
            Era::Past => [BucketLabel::MinusThree, BucketLabel::MinusTwo],
            Era::Present => [BucketLabel::MinusOne, BucketLabel::PlusOne],
            Era::Future => [BucketLabel::PlusTwo, BucketLabel::PlusThree],
        }
    }
}

/// Valence row of the plane (y axis).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tone {
    /// y > 0.
    Positive,
    /// y < 0.
    Negative,
    /// y == 0. Not produced by bucket labels.
    Neutral,
}

impl Tone {
    /// Sub-label from the sign of `y`.
    pub const fn from_sign(y: i8) -> Self {
        if y > 0 {
            Tone::Positive
        } else if y < 0 {
            Tone::Negative
        } else {
            Tone::Neutral
        }
    }

    /// Bucket labels on the y axis that belong to this tone, ascending.
    /// Empty for [`Tone::Neutral`].
    pub fn y_labels(self) -> &'static [BucketLabel] {
        const POSITIVE: [BucketLabel; 3] =
            [BucketLabel::PlusOne, BucketLabel::PlusTwo, BucketLabel::PlusThree];
        const NEGATIVE: [BucketLabel; 3] =
            [BucketLabel::MinusThree, BucketLabel::MinusTwo, BucketLabel::MinusOne];
        match self {
            Tone::Positive => &POSITIVE,
            Tone::Negative => &NEGATIVE,
            Tone::Neutral => &[],
        }
    }
}

// ─── Quadrant ───────────────────────────────────────────────────────────────

/// Named emotional region derived from a pair of bucket labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Quadrant {
    /// Nostalgic, warm memories.
    PastPositive,
    /// Regret, loss, painful memories.
    PastNegative,
    /// Past with no valence.
    PastNeutral,
    /// Calm, contented now.
    PresentPositive,
    /// Unease, fatigue, loneliness now.
    PresentNegative,
    /// Present with no valence.
    PresentNeutral,
    /// Anticipation, hope, growth.
    FuturePositive,
    /// Dread, doubt, foreboding.
    FutureNegative,
    /// Future with no valence.
    FutureNeutral,
    /// Fallback when no era guard matches.
    Unclassifiable,
}

impl Quadrant {
    /// Every quadrant, named regions first and the fallback last.
    pub const ALL: [Quadrant; 10] = [
        Quadrant::PastPositive,
        Quadrant::PastNegative,
        Quadrant::PastNeutral,
        Quadrant::PresentPositive,
        Quadrant::PresentNegative,
        Quadrant::PresentNeutral,
        Quadrant::FuturePositive,
        Quadrant::FutureNegative,
        Quadrant::FutureNeutral,
        Quadrant::Unclassifiable,
    ];

    /// Compose a quadrant from its era and tone.
    pub const fn new(era: Era, tone: Tone) -> Self {
        match (era, tone) {
            (Era::Past, Tone::Positive) => Quadrant::PastPositive,
            (Era::Past, Tone::Negative) => Quadrant::PastNegative,
            (Era::Past, Tone::Neutral) => Quadrant::PastNeutral,
            (Era::Present, Tone::Positive) => Quadrant::PresentPositive,
            (Era::Present, Tone::Negative) => Quadrant::PresentNegative,
            (Era::Present, Tone::Neutral) => Quadrant::PresentNeutral,
            (Era::Future, Tone::Positive) => Quadrant::FuturePositive,
            (Era::Future, Tone::Negative) => Quadrant::FutureNegative,
            (Era::Future, Tone::Neutral) => Quadrant::FutureNeutral,
        }
    }

    /// Era and tone of this quadrant, or `None` for [`Quadrant::Unclassifiable`].
    pub const fn parts(self) -> Option<(Era, Tone)> {
        match self {
            Quadrant::PastPositive => Some((Era::Past, Tone::Positive)),
            Quadrant::PastNegative => Some((Era::Past, Tone::Negative)),
            Quadrant::PastNeutral => Some((Era::Past, Tone::Neutral)),
            Quadrant::PresentPositive => Some((Era::Present, Tone::Positive)),
            Quadrant::PresentNegative => Some((Era::Present, Tone::Negative)),
            Quadrant::PresentNeutral => Some((Era::Present, Tone::Neutral)),
            Quadrant::FuturePositive => Some((Era::Future, Tone::Positive)),
            Quadrant::FutureNegative => Some((Era::Future, Tone::Negative)),
            Quadrant::FutureNeutral => Some((Era::Future, Tone::Neutral)),
            Quadrant::Unclassifiable => None,
        }
    }

    /// Stable kebab-case name, e.g. `"future-positive"`.
    pub const fn label(self) -> &'static str {
        match self {
            Quadrant::PastPositive => "past-positive",
            Quadrant::PastNegative => "past-negative",
            Quadrant::PastNeutral => "past-neutral",
            Quadrant::PresentPositive => "present-positive",
            Quadrant::PresentNegative => "present-negative",
            Quadrant::PresentNeutral => "present-neutral",
            Quadrant::FuturePositive => "future-positive",
            Quadrant::FutureNegative => "future-negative",
            Quadrant::FutureNeutral => "future-neutral",
            Quadrant::Unclassifiable => "unclassifiable",
        }
    }

    /// Japanese display name shown on the result page.
    pub const fn label_ja(self) -> &'static str {
        match self {
            Quadrant::PastPositive => "過去ポジティブ",
            Quadrant::PastNegative => "過去ネガティブ",
            Quadrant::PastNeutral => "過去中立",
            Quadrant::PresentPositive => "現在ポジティブ",
            Quadrant::PresentNegative => "現在ネガティブ",
            Quadrant::PresentNeutral => "現在中立",
            Quadrant::FuturePositive => "未来ポジティブ",
            Quadrant::FutureNegative => "未来ネガティブ",
            Quadrant::FutureNeutral => "未来中立",
            Quadrant::Unclassifiable => "分類不能",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Quadrant {
    type Err = DiagnoseError;

    /// Accepts either the kebab-case label or the Japanese display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Quadrant::ALL
            .iter()
            .copied()
            .find(|q| q.label() == s || q.label_ja() == s)
            .ok_or(DiagnoseError::UnknownRegion)
    }
}

// ─── Classification ─────────────────────────────────────────────────────────

/// Classify a pair of raw integer labels.
///
/// Same ordered guards as [`classify`], but over plain integers so the
/// neutral row and the fallback are expressible.
#[allow(clippy::manual_range_contains)]
pub fn classify_values(x: i8, y: i8) -> Quadrant {
    let tone = Tone::from_sign(y);
    if x >= 2 {
        Quadrant::new(Era::Future, tone)
    } else if -1 <= x && x <= 1 {
        Quadrant::new(Era::Present, tone)
    } else if x <= -2 {
        Quadrant::new(Era::Past, tone)
    } else {
        Quadrant::Unclassifiable
    }
}

/// Classify a pair of bucket labels into a quadrant.
///
/// ```
/// use kansei_core::bucket::BucketLabel;
/// use kansei_core::region::{classify, Quadrant};
///
/// let q = classify(BucketLabel::PlusThree, BucketLabel::PlusThree);
/// assert_eq!(q, Quadrant::FuturePositive);
/// ```
pub fn classify(x: BucketLabel, y: BucketLabel) -> Quadrant {
    classify_values(x.value(), y.value())
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_reference_points() {
        assert_eq!(classify(BucketLabel::PlusThree, BucketLabel::PlusThree), Quadrant::FuturePositive);
        assert_eq!(classify_values(0, 2), Quadrant::PresentPositive);
        assert_eq!(classify(BucketLabel::MinusThree, BucketLabel::MinusOne), Quadrant::PastNegative);
    }

    #[test]
    fn test_full_grid_sweep() {
        for x in BucketLabel::ALL {
            for y in BucketLabel::ALL {
                let q = classify(x, y);
                let (era, tone) = q.parts().expect("bucket labels always classify");
                let expected_era = match x.value() {
                    2 | 3 => Era::Future,
                    -1 | 1 => Era::Present,
                    _ => Era::Past,
                };
                assert_eq!(era, expected_era, "x={} y={}", x, y);
                assert_eq!(tone, if y.value() > 0 { Tone::Positive } else { Tone::Negative });
                assert!(era.x_labels().contains(&x));
                assert!(tone.y_labels().contains(&y));
            }
        }
    }

    #[test]
    fn test_neutral_branch_exists_for_raw_zero() {
        assert_eq!(classify_values(3, 0), Quadrant::FutureNeutral);
        assert_eq!(classify_values(0, 0), Quadrant::PresentNeutral);
        assert_eq!(classify_values(-3, 0), Quadrant::PastNeutral);
    }

    #[test]
    fn test_labels_round_trip_through_from_str() {
        for q in Quadrant::ALL {
            assert_eq!(q.label().parse::<Quadrant>(), Ok(q));
            assert_eq!(q.label_ja().parse::<Quadrant>(), Ok(q));
        }
        assert_eq!("somewhere-else".parse::<Quadrant>(), Err(DiagnoseError::UnknownRegion));
    }

    #[test]
    fn test_new_and_parts_agree() {
        for q in Quadrant::ALL {
            if let Some((era, tone)) = q.parts() {
                assert_eq!(Quadrant::new(era, tone), q);
            }
        }
    }
}
