//! # ScoutX Engine
//!
//! The similarity query service: one immutable [`SimilarityEngine`]
//! context built at startup, answering "players most similar to X"
//! queries against the fused feature matrix and the brute-force cosine
//! index.
//!
//! ## Example
//!
//! ```rust,no_run
//! use scoutx_engine::SimilarityEngine;
//!
//! let engine = SimilarityEngine::build("./data/players.csv", 5)?;
//! for player in engine.find_similar("Lionel Messi")? {
//!     println!("{} {:.4}", player.name, player.similarity_score);
//! }
//! # Ok::<(), scoutx_core::Error>(())
//! ```

pub mod query;

pub use query::{SimilarPlayer, SimilarityEngine, DEFAULT_NEIGHBORS};
