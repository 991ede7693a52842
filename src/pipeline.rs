//! The diagnosis pipeline: raw scores → bucket labels → quadrant → kansei words.
//!
//! [`diagnose`] is the one-shot form over the curated lexicon. [`Diagnoser`]
//! is the long-lived form a host keeps for the life of the process: it
//! resolves every quadrant's word list once at construction and afterwards
//! only reads.

use hashbrown::HashMap;

use crate::bucket::{round_bucket, BucketLabel};
use crate::error::{Axis, Result};
use crate::lexicon::{Lexicon, WordList};
use crate::region::{classify, Quadrant};

// ─── Scores ─────────────────────────────────────────────────────────────────

/// Raw regression outputs for one image.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scores {
    /// Temporal axis score (past → future).
    pub x: f64,
    /// Valence axis score (negative → positive).
    pub y: f64,
}

impl Scores {
    /// Pair up two axis scores.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── Diagnosis ──────────────────────────────────────────────────────────────

/// Every intermediate value of one pipeline run, ready for display.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnosis {
    /// The raw scores the diagnosis was computed from.
    pub scores: Scores,
    /// Bucket label of the x score.
    pub x_bucket: BucketLabel,
    /// Bucket label of the y score.
    pub y_bucket: BucketLabel,
    /// Region the bucket pair falls in.
    pub quadrant: Quadrant,
    /// Kansei words for that region.
    pub words: WordList,
}

impl Diagnosis {
    /// Kebab-case region name, e.g. `"future-positive"`.
    pub fn region_name(&self) -> &'static str {
        self.quadrant.label()
    }
}

// ─── Diagnoser ──────────────────────────────────────────────────────────────

/// Pipeline with a lexicon and a per-quadrant word index fixed at construction.
///
/// Holds no mutable state; `&Diagnoser` can be shared across threads.
#[derive(Clone, Debug)]
pub struct Diagnoser {
    lexicon: Lexicon,
    index: HashMap<Quadrant, WordList>,
}

impl Diagnoser {
    /// Diagnoser over the curated lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::curated())
    }

    /// Diagnoser over an arbitrary frozen lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        let index: HashMap<Quadrant, WordList> = Quadrant::ALL
            .iter()
            .map(|&q| (q, lexicon.words_for(q)))
            .collect();
        tracing::debug!(quadrants = index.len(), "built quadrant word index");
        Self { lexicon, index }
    }

    /// The lexicon this diagnoser was built from.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Indexed word list for `region`.
    pub fn words_for(&self, region: Quadrant) -> &WordList {
        // `with_lexicon` indexes every variant of `Quadrant::ALL`.
        &self.index[&region]
    }

    /// Run the pipeline on a pair of raw scores.
    ///
    /// Fails with [`DiagnoseError::InvalidInput`] tagged with the offending
    /// axis when either score is NaN or infinite.
    ///
    /// [`DiagnoseError::InvalidInput`]: crate::error::DiagnoseError::InvalidInput
    pub fn diagnose(&self, raw_x: f64, raw_y: f64) -> Result<Diagnosis> {
        let x_bucket = round_bucket(raw_x).map_err(|e| e.on_axis(Axis::X))?;
        let y_bucket = round_bucket(raw_y).map_err(|e| e.on_axis(Axis::Y))?;
        let quadrant = classify(x_bucket, y_bucket);
        let words = self.words_for(quadrant).clone();

        tracing::debug!(
            raw_x,
            raw_y,
            x_bucket = x_bucket.value(),
            y_bucket = y_bucket.value(),
            region = quadrant.label(),
            words = words.len(),
            "diagnosed scores"
        );

        Ok(Diagnosis {
            scores: Scores::new(raw_x, raw_y),
            x_bucket,
            y_bucket,
            quadrant,
            words,
        })
    }

    /// Run the pipeline on a [`Scores`] pair.
    pub fn diagnose_scores(&self, scores: Scores) -> Result<Diagnosis> {
        self.diagnose(scores.x, scores.y)
    }
}

impl Default for Diagnoser {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot pipeline over the curated lexicon.
///
/// Builds a throwaway [`Diagnoser`]; hosts diagnosing more than once should
/// keep one instead.
///
/// ```
/// use kansei_core::pipeline::diagnose;
/// use kansei_core::region::Quadrant;
///
/// let d = diagnose(2.6, 1.8).unwrap();
/// assert_eq!(d.x_bucket.value(), 3);
/// assert_eq!(d.y_bucket.value(), 2);
/// assert_eq!(d.quadrant, Quadrant::FuturePositive);
/// ```
pub fn diagnose(raw_x: f64, raw_y: f64) -> Result<Diagnosis> {
    Diagnoser::with_lexicon(Lexicon::curated()).diagnose(raw_x, raw_y)
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiagnoseError;
    use crate::lexicon::words_for;

    #[test]
    fn test_end_to_end_future_positive() {
        let d = diagnose(2.6, 1.8).unwrap();
        assert_eq!(d.x_bucket, BucketLabel::PlusThree);
        assert_eq!(d.y_bucket, BucketLabel::PlusTwo);
        assert_eq!(d.quadrant, Quadrant::FuturePositive);
        assert_eq!(d.region_name(), "future-positive");
        assert_eq!(d.words, words_for(Quadrant::FuturePositive));
        assert_eq!(d.scores, Scores::new(2.6, 1.8));
    }

    #[test]
    fn test_diagnoser_matches_one_shot() {
        let diagnoser = Diagnoser::new();
        let cases: &[(f64, f64)] = &[
            (2.6, 1.8),
            (0.0, 0.0),
            (-3.2, -0.4),
            (-1.6, 2.9),
            (1.45, -2.51),
            (-2.45, 0.05),
        ];
        for &(x, y) in cases {
            assert_eq!(diagnoser.diagnose(x, y), diagnose(x, y), "x={} y={}", x, y);
        }
    }

    #[test]
    fn test_diagnoser_index_covers_every_quadrant() {
        let diagnoser = Diagnoser::default();
        for q in Quadrant::ALL {
            assert_eq!(diagnoser.words_for(q), &words_for(q));
        }
    }

    #[test]
    fn test_invalid_axis_is_reported() {
        let diagnoser = Diagnoser::new();
        assert!(matches!(
            diagnoser.diagnose(f64::NAN, 1.0),
            Err(DiagnoseError::InvalidInput { axis: Axis::X, .. })
        ));
        assert!(matches!(
            diagnose(1.0, f64::INFINITY),
            Err(DiagnoseError::InvalidInput { axis: Axis::Y, .. })
        ));
    }

    #[test]
    fn test_idempotent() {
        let diagnoser = Diagnoser::new();
        let a = diagnoser.diagnose(-0.7, 0.3).unwrap();
        let b = diagnoser.diagnose(-0.7, 0.3).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.quadrant, Quadrant::PresentPositive);
    }
}
