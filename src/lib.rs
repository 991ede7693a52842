//! # kansei-core
//!
//! Photo impression diagnosis: two regression scores in, a temporal/valence
//! region and its kansei words out.
//!
//! ---
//!
//! A host runs two pretrained regressors over an uploaded photograph. One
//! scores *when* the picture feels like it belongs (past → future), the other
//! *how* it feels (negative → positive). This crate turns those two numbers
//! into something a person can read.
//!
//! **Bucketing.** Each score is rounded to one decimal and dropped into one
//! of six ordinal labels, {-3, -2, -1, 1, 2, 3}. There is no zero.
//!
//! **Classification.** The label pair picks one of the named regions of the
//! time × valence plane: past, present, or future, each positive or negative.
//!
//! **Lookup.** A frozen 36-cell lexicon of curated words, keyed by label
//! pair, is aggregated over the region's cells.
//!
//! ---
//!
//! ## The pipeline
//!
//! ```text
//! predict(image) → (x, y) → round_bucket → (BucketLabel, BucketLabel) → classify → Quadrant → words_for → WordList
//!       ↑                                                                                          ↑
//!   ScoreModel                                                                                  Lexicon
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`bucket`] | [`BucketLabel`] | Round a raw score and bucket it with fixed thresholds |
//! | [`region`] | [`Quadrant`], [`Era`], [`Tone`] | Ordered-guard classifier over the label plane |
//! | [`lexicon`] | [`Lexicon`], [`WordList`] | Frozen word table and per-region aggregation |
//! | [`pipeline`] | [`Diagnoser`], [`Diagnosis`], [`Scores`] | Compose the three stages |
//! | [`model`] | [`ScoreModel`], [`AxisModels`] | Seam for the external regression model |
//! | [`error`] | [`DiagnoseError`] | Error taxonomy |
//! | [`report`] | `report::DiagnosisReport` | Serialisable result for renderers (requires `serde` feature) |
//!
//! ## Quick start
//!
//! ```rust
//! use kansei_core::{Diagnoser, Quadrant};
//!
//! let diagnoser = Diagnoser::new();
//! let d = diagnoser.diagnose(2.6, 1.8).unwrap();
//! assert_eq!(d.quadrant, Quadrant::FuturePositive);
//! assert_eq!(d.words[0], "興味");
//! ```
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` + `alloc` by default. Enable the `std` feature
//! for a std-linked build, `serde` for [`report`] and serde derives, and
//! `python-ffi` for the PyO3 module.
//!
//! ## Logging
//!
//! Pipeline stages emit `tracing` events (`debug` per diagnosis, `warn` on
//! rejected scores). The crate never installs a subscriber.

#![cfg_attr(not(any(feature = "std", feature = "python-ffi")), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(feature = "std", feature = "python-ffi"))]
extern crate std;

pub mod bucket;
pub mod error;
pub mod lexicon;
pub mod model;
pub mod pipeline;
pub mod region;
#[cfg(feature = "serde")]
pub mod report;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use bucket::{round_bucket, BucketLabel};
pub use error::{Axis, DiagnoseError};
pub use lexicon::{words_for, Lexicon, WordList, NOT_APPLICABLE};
pub use model::{AxisModels, AxisRegressor, ModelDiagnoseError, ScoreModel};
pub use pipeline::{diagnose, Diagnoser, Diagnosis, Scores};
pub use region::{classify, Era, Quadrant, Tone};
