//! Similarity query service
//!
//! [`SimilarityEngine`] is the single context object the host passes to
//! every query handler: constructed once at startup, immutable afterwards.
//! Queries are pure reads and safe to serve concurrently without locking.

use ahash::AHashMap;
use scoutx_core::{Error, Neighbor, NeighborIndex, Result};
use scoutx_model::{load_players, FeatureGroups, FittedEncoder, PlayerId, PlayerTable};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Default number of similar players returned per query
pub const DEFAULT_NEIGHBORS: usize = 5;

/// Display columns every result record carries, besides the score.
/// Internal feature columns are never exposed.
const DISPLAY_COLUMNS: [&str; 9] = [
    "name",
    "age",
    "overall",
    "potential",
    "value",
    "country",
    "club",
    "best_position",
    "preferred_foot",
];

/// One similar-player record: display attributes plus the score
#[derive(Debug, Clone, Serialize)]
pub struct SimilarPlayer {
    pub name: String,
    pub age: u32,
    pub overall: u32,
    pub potential: u32,
    pub value: f64,
    pub country: String,
    pub club: String,
    pub best_position: String,
    pub preferred_foot: String,
    pub similarity_score: f32,
}

/// The fitted similarity pipeline: table, encoder, index and name lookup
///
/// Built by running the whole initialization sequence (load, partition,
/// fit, index) inside the constructor, so no partially-initialized engine
/// is ever observable. Hot-reload of data is not supported; rebuild the
/// engine to pick up a new source.
pub struct SimilarityEngine {
    table: PlayerTable,
    encoder: FittedEncoder,
    index: NeighborIndex,
    names: AHashMap<String, PlayerId>,
    neighbors: usize,
}

impl SimilarityEngine {
    /// Load the CSV source and build the full pipeline
    pub fn build<P: AsRef<Path>>(path: P, neighbors: usize) -> Result<Self> {
        let table = load_players(path)?;
        Self::from_table(table, neighbors)
    }

    /// Build the pipeline over an already-loaded table
    pub fn from_table(table: PlayerTable, neighbors: usize) -> Result<Self> {
        for column in DISPLAY_COLUMNS {
            if !table.has_column(column) {
                return Err(Error::MissingColumn(column.to_string()));
            }
        }

        let groups = FeatureGroups::for_table(&table)?;
        let encoder = FittedEncoder::fit(&table, &groups)?;
        let index = NeighborIndex::build(encoder.matrix().to_vec())?;

        // Case-folded lookup; on duplicate names the lowest id wins
        let mut names = AHashMap::with_capacity(table.len());
        for id in 0..table.len() {
            if let Some(name) = table.value(id, "name") {
                names.entry(name.to_lowercase()).or_insert(id);
            }
        }

        info!(
            players = table.len(),
            features = encoder.output_dim(),
            "similarity index ready"
        );

        Ok(Self {
            table,
            encoder,
            index,
            names,
            neighbors,
        })
    }

    /// Number of indexed players
    pub fn player_count(&self) -> usize {
        self.table.len()
    }

    /// Length of the fused feature vectors
    pub fn feature_count(&self) -> usize {
        self.encoder.output_dim()
    }

    /// Configured number of neighbors per query
    pub fn neighbors(&self) -> usize {
        self.neighbors
    }

    pub fn encoder(&self) -> &FittedEncoder {
        &self.encoder
    }

    /// Resolve a player name to its row identifier, case-insensitively
    pub fn resolve(&self, name: &str) -> Result<PlayerId> {
        self.names
            .get(&name.to_lowercase())
            .copied()
            .ok_or_else(|| Error::PlayerNotFound(name.to_string()))
    }

    /// Find the configured number of players most similar to the named one
    pub fn find_similar(&self, name: &str) -> Result<Vec<SimilarPlayer>> {
        self.find_similar_with_k(name, self.neighbors)
    }

    /// Find the k players most similar to the named one
    ///
    /// The query vector is the player's already-fused row from the matrix
    /// built at startup, so results are exactly consistent with the index.
    /// The player itself never appears in the results.
    pub fn find_similar_with_k(&self, name: &str, k: usize) -> Result<Vec<SimilarPlayer>> {
        let player_id = self.resolve(name)?;
        let query = &self.encoder.matrix()[player_id];

        // The query row is itself indexed and comes back as a distance-0
        // hit, so ask for one extra and remove it by identifier. Filtering
        // on the id rather than dropping the first hit keeps a duplicate
        // feature row from standing in for the player.
        let mut hits = self.index.search(query, k + 1)?;
        hits.retain(|neighbor| neighbor.id != player_id);
        hits.truncate(k);

        let mut players = hits
            .iter()
            .map(|neighbor| self.project(neighbor))
            .collect::<Result<Vec<SimilarPlayer>>>()?;

        // Hits arrive by ascending distance; re-sort explicitly on the
        // score the caller sees, ties by original row order.
        players.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(player = %name, results = players.len(), "similarity query served");
        Ok(players)
    }

    /// Project a neighbor onto the display whitelist plus its score
    fn project(&self, neighbor: &Neighbor) -> Result<SimilarPlayer> {
        let id = neighbor.id;
        Ok(SimilarPlayer {
            name: self.display(id, "name"),
            age: self.table.numeric_value(id, "age")? as u32,
            overall: self.table.numeric_value(id, "overall")? as u32,
            potential: self.table.numeric_value(id, "potential")? as u32,
            value: self.table.numeric_value(id, "value")?,
            country: self.display(id, "country"),
            club: self.display(id, "club"),
            best_position: self.display(id, "best_position"),
            preferred_foot: self.display(id, "preferred_foot"),
            similarity_score: 1.0 - neighbor.distance,
        })
    }

    fn display(&self, id: PlayerId, column: &str) -> String {
        self.table
            .value(id, column)
            .unwrap_or_default()
            .to_string()
    }
}
