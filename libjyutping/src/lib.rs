//! libjyutping crate root
//!
//! Jyutping table processing built on `libtable-core`: conversion of
//! toneless Jyutping syllables to Cantonese romanization, tone digit to tone
//! letter encoding, Unihan reading import and frequency merging.
//!
//! Public API exported here:
//! - `Converter` and `ConversionCache` from `converter`
//! - `encode_tone`, `split_tone` from `tone`
//! - `Reading`, `FrequencyRecord`, `FrequencyCorpus`, `build_corpus` from `corpus`
//! - `merge`, `MergeStats` from `merge`
//! - `RegionClassifier` from `cloud` (feature `cloud`)

pub mod config;
pub mod converter;
pub mod corpus;
pub mod error;
pub mod merge;
pub mod tone;

#[cfg(feature = "cloud")]
pub mod cloud;

pub use config::JyutpingConfig;
pub use converter::{ConversionCache, Converter};
pub use corpus::{
    build_corpus, parse_readings, read_readings, FrequencyCorpus, FrequencyRecord, Reading,
};
pub use error::{JyutpingError, Result};
pub use merge::{merge, MergeStats};
pub use tone::{encode_tone, split_tone, tone_letters, TONE_LETTERS};

#[cfg(feature = "cloud")]
pub use cloud::{RegionClassifier, RegionalUsage};
