//! # ScoutX Model
//!
//! Dataset loading and feature encoding for the ScoutX player similarity
//! engine.
//!
//! The pipeline runs once at startup, in order:
//!
//! 1. [`load_players`] - CSV source into a [`PlayerTable`] with dense
//!    0-based identifiers and the derived work-rate columns
//! 2. [`FeatureGroups::for_table`] - static five-way column partition
//!    (numeric / categorical / ordinal / binary / dropped)
//! 3. [`FittedEncoder::fit`] - standardization, one-hot vocabularies,
//!    rank encoding, binary collapse; produces the fused feature matrix
//!
//! The fitted encoder is immutable: query rows go through the frozen
//! transformation, never a refit.

pub mod dataset;
pub mod encoder;
pub mod features;

pub use dataset::{
    load_players, PlayerId, PlayerTable, ATK_WORKRATE_COLUMN, DEF_WORKRATE_COLUMN,
    WORK_RATE_COLUMN,
};
pub use encoder::{work_rate_rank, FittedEncoder, WORK_RATE_LEVELS};
pub use features::{
    FeatureGroups, BINARY_COLUMNS, CATEGORICAL_COLUMNS, DROP_COLUMNS, ORDINAL_COLUMNS,
};
