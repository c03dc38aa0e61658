//! # ScoutX
//!
//! An in-memory player similarity engine: tabular player attributes are
//! fused into one numeric feature space and queried with brute-force
//! cosine-distance nearest-neighbor search.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install scoutx
//! scoutx --data ./data/players.csv --http-port 8000
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use scoutx::prelude::*;
//!
//! let engine = SimilarityEngine::build("./data/players.csv", 5)?;
//! let similar = engine.find_similar("Lionel Messi")?;
//! for player in similar {
//!     println!("{:<28} {:.4}", player.name, player.similarity_score);
//! }
//! # Ok::<(), scoutx::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! ScoutX is composed of several crates:
//!
//! - [`scoutx-core`](https://docs.rs/scoutx-core) - Vectors, cosine distance, brute-force neighbor index
//! - [`scoutx-model`](https://docs.rs/scoutx-model) - Dataset loading, feature partition, fused encoding
//! - [`scoutx-engine`](https://docs.rs/scoutx-engine) - The similarity query service
//! - [`scoutx-api`](https://docs.rs/scoutx-api) - REST endpoint and CORS
//!
//! ## How a Query Works
//!
//! ```text
//! ┌──────────┐     ┌───────────┐     ┌───────────┐     ┌───────────┐
//! │  Loader  │────>│  Encoder  │────>│   Index   │<────│   Query   │
//! │  (CSV)   │     │ (fused    │     │ (cosine   │     │  Service  │
//! └──────────┘     │  matrix)  │     │  top-k)   │     └───────────┘
//!                  └───────────┘     └───────────┘
//! ```
//!
//! Everything left of the query service runs once at startup and is
//! immutable afterwards; queries are concurrent-safe pure reads.

// Re-export core types
pub use scoutx_core::{Error, Neighbor, NeighborIndex, Result, Vector};

// Re-export the model pipeline
pub use scoutx_model::{load_players, FeatureGroups, FittedEncoder, PlayerId, PlayerTable};

// Re-export the query service
pub use scoutx_engine::{SimilarPlayer, SimilarityEngine, DEFAULT_NEIGHBORS};

// Re-export API
pub use scoutx_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        load_players, Error, FeatureGroups, FittedEncoder, Neighbor, NeighborIndex, PlayerId,
        PlayerTable, RestApi, Result, SimilarPlayer, SimilarityEngine, Vector,
        DEFAULT_NEIGHBORS,
    };
}
