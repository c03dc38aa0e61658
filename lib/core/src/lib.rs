//! # ScoutX Core
//!
//! Core library for the ScoutX player similarity engine.
//!
//! This crate provides the metric-space primitives the engine is built on:
//!
//! - [`Vector`] - Dense vector representation with cosine similarity/distance
//! - [`NeighborIndex`] - Brute-force cosine-distance nearest-neighbor index
//! - [`Error`] / [`Result`] - The error taxonomy shared by every ScoutX crate
//!
//! ## Example
//!
//! ```rust
//! use scoutx_core::{NeighborIndex, Vector};
//!
//! let index = NeighborIndex::build(vec![
//!     Vector::new(vec![1.0, 0.0]),
//!     Vector::new(vec![0.0, 1.0]),
//! ]).unwrap();
//!
//! let hits = index.search(&Vector::new(vec![1.0, 0.1]), 1).unwrap();
//! assert_eq!(hits[0].id, 0);
//! ```

pub mod error;
pub mod knn;
pub mod vector;

pub use error::{Error, Result};
pub use knn::{Neighbor, NeighborIndex};
pub use vector::Vector;
