//! Brute-force cosine-distance nearest-neighbor index
//!
//! Every query is an exhaustive scan over all indexed rows. For a few
//! thousand static rows this stays well under a millisecond and avoids the
//! build cost and recall loss of an approximate structure; it does not
//! scale past datasets that fit comfortably in memory.

use crate::{Error, Result, Vector};
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::collections::BinaryHeap;

/// One search hit: the row identifier and its cosine distance to the query
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    pub id: usize,
    pub distance: f32,
}

/// Immutable brute-force nearest-neighbor structure
///
/// Built once over the fused feature matrix and read-only thereafter.
/// Row identifiers are the positions the vectors were built with, so they
/// line up with the dataset's dense identifier space.
#[derive(Debug, Clone)]
pub struct NeighborIndex {
    rows: Vec<Vector>,
    dim: usize,
}

impl NeighborIndex {
    /// Build the index over the given rows
    ///
    /// All rows must share one dimension; the first row fixes it.
    pub fn build(rows: Vec<Vector>) -> Result<Self> {
        let dim = rows.first().map(Vector::dim).unwrap_or(0);
        for row in &rows {
            if row.dim() != dim {
                return Err(Error::InvalidDimension {
                    expected: dim,
                    actual: row.dim(),
                });
            }
        }
        Ok(Self { rows, dim })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Get an indexed row vector by identifier
    pub fn vector(&self, id: usize) -> Option<&Vector> {
        self.rows.get(id)
    }

    /// Return the k nearest rows to the query under cosine distance
    ///
    /// Results are ordered by ascending distance, ties broken by original
    /// row order. Asking for more neighbors than rows returns every row.
    /// A query row that is itself indexed comes back as a distance-0 hit;
    /// callers wanting to exclude the self-match should request k+1.
    pub fn search(&self, query: &Vector, k: usize) -> Result<Vec<Neighbor>> {
        if !self.rows.is_empty() && query.dim() != self.dim {
            return Err(Error::InvalidDimension {
                expected: self.dim,
                actual: query.dim(),
            });
        }

        // Bounded max-heap keyed on (distance, id): the furthest candidate
        // sits on top and is evicted first, and among equal distances the
        // higher id goes, which keeps the tie-break stable.
        let mut heap: BinaryHeap<(OrderedFloat<f32>, usize)> =
            BinaryHeap::with_capacity(k + 1);

        for (id, row) in self.rows.iter().enumerate() {
            let distance = query.cosine_distance(row);
            heap.push((OrderedFloat(distance), id));
            if heap.len() > k {
                heap.pop();
            }
        }

        let neighbors = heap
            .into_sorted_vec()
            .into_iter()
            .map(|(distance, id)| Neighbor {
                id,
                distance: distance.into_inner(),
            })
            .collect();

        Ok(neighbors)
    }
}
