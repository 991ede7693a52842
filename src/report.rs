//! Serialisable diagnosis report for rendering layers.
//!
//! A [`DiagnosisReport`] carries everything a result page shows: the raw
//! predictions, both bucket labels, the region in both naming schemes, the
//! kansei words, and optionally the name under which the host stored the
//! uploaded image. It owns its strings so it can round-trip through JSON.
//!
//! # no_std
//!
//! This module requires the `serde` feature and works with no_std + alloc.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::bucket::BucketLabel;
use crate::pipeline::Diagnosis;
use crate::region::Quadrant;

/// Owned, serialisable view of a [`Diagnosis`].
///
/// ```rust,ignore
/// use kansei_core::pipeline::diagnose;
/// use kansei_core::report::DiagnosisReport;
///
/// let report = DiagnosisReport::from_diagnosis(&diagnose(2.6, 1.8)?)
///     .with_image_filename("3f2a9c.jpg");
/// let json = serde_json::to_string(&report)?;
/// ```
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct DiagnosisReport {
    /// Raw x-axis prediction.
    pub pred_x: f64,
    /// Raw y-axis prediction.
    pub pred_y: f64,
    /// Bucket label of `pred_x`.
    pub x_label: BucketLabel,
    /// Bucket label of `pred_y`.
    pub y_label: BucketLabel,
    /// Region the labels fall in.
    pub region: Quadrant,
    /// Japanese display name of `region`.
    pub region_ja: String,
    /// Kansei words for `region`.
    pub words: Vec<String>,
    /// Stored image name, when the host kept the upload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_filename: Option<String>,
}

impl DiagnosisReport {
    /// Build a report from a finished diagnosis.
    pub fn from_diagnosis(d: &Diagnosis) -> Self {
        Self {
            pred_x: d.scores.x,
            pred_y: d.scores.y,
            x_label: d.x_bucket,
            y_label: d.y_bucket,
            region: d.quadrant,
            region_ja: d.quadrant.label_ja().to_string(),
            words: d.words.iter().map(|w| w.to_string()).collect(),
            image_filename: None,
        }
    }

    /// Attach the stored image name.
    pub fn with_image_filename(mut self, name: impl Into<String>) -> Self {
        self.image_filename = Some(name.into());
        self
    }

    /// Whether the word list is the `not applicable` fallback.
    pub fn is_not_applicable(&self) -> bool {
        self.words.len() == 1 && self.words[0] == crate::lexicon::NOT_APPLICABLE
    }
}

impl From<&Diagnosis> for DiagnosisReport {
    fn from(d: &Diagnosis) -> Self {
        Self::from_diagnosis(d)
    }
}
