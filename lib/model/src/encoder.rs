//! Feature encoder
//!
//! Fits a deterministic transformation from raw table columns to one fused
//! numeric space and applies it to every row. The fused layout is frozen
//! at fit time: standardized numerics first, then one-hot categoricals,
//! then the rank-encoded work rates, then the collapsed binaries. Fitting
//! is one-shot; a new fit replaces all prior state.

use crate::dataset::{PlayerId, PlayerTable};
use crate::features::FeatureGroups;
use ahash::AHashMap;
use scoutx_core::{Error, Result, Vector};
use std::collections::BTreeSet;

/// Work-rate levels in ascending rank order
pub const WORK_RATE_LEVELS: [&str; 3] = ["Low", "Medium", "High"];

/// Rank of a work-rate level: Low=0, Medium=1, High=2
///
/// The ordering is the point: "High/Medium" and "High/High" must land
/// closer together than "High/Low" and "Low/High", which a plain one-hot
/// would not give.
pub fn work_rate_rank(level: &str) -> Option<f32> {
    WORK_RATE_LEVELS
        .iter()
        .position(|known| *known == level)
        .map(|rank| rank as f32)
}

/// Per-column standardization statistics from the fit data
#[derive(Debug, Clone)]
struct ColumnStats {
    mean: f64,
    std: f64,
}

impl ColumnStats {
    fn fit(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self { mean: 0.0, std: 0.0 };
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Self {
            mean,
            std: variance.sqrt(),
        }
    }

    /// Standardize one value; a zero-variance column maps to exactly 0
    fn transform(&self, value: f64) -> f32 {
        if self.std <= f64::EPSILON {
            0.0
        } else {
            ((value - self.mean) / self.std) as f32
        }
    }
}

/// Category vocabulary frozen at fit time
///
/// Values are kept sorted so repeated fits over the same data (in any row
/// order) freeze the same column layout. A value outside the vocabulary
/// maps to no position: its one-hot contribution is the zero vector.
#[derive(Debug, Clone)]
struct Vocabulary {
    values: Vec<String>,
    index: AHashMap<String, usize>,
}

impl Vocabulary {
    fn fit<'a, I: Iterator<Item = &'a str>>(observed: I) -> Self {
        let distinct: BTreeSet<&str> = observed.collect();
        let values: Vec<String> = distinct.into_iter().map(str::to_string).collect();
        let index = values
            .iter()
            .enumerate()
            .map(|(position, value)| (value.clone(), position))
            .collect();
        Self { values, index }
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn position(&self, value: &str) -> Option<usize> {
        self.index.get(value).copied()
    }
}

/// Encoding chosen for a binary-group column at fit time
#[derive(Debug, Clone)]
enum BinaryEncoding {
    /// Exactly two observed values: one 0/1 column, 1 for `positive`
    /// (the lexicographically greater value, drop-first one-hot).
    Collapsed { positive: String },
    /// More (or fewer) than two observed values: plain one-hot.
    Expanded(Vocabulary),
}

/// The fitted transformation plus the fused matrix it produced
///
/// Owns everything needed to re-apply the exact transformation to a new
/// row: the same transform, never a refit, is applied to query rows.
#[derive(Debug, Clone)]
pub struct FittedEncoder {
    groups: FeatureGroups,
    numeric_stats: Vec<ColumnStats>,
    vocabularies: Vec<Vocabulary>,
    binary: Vec<BinaryEncoding>,
    feature_names: Vec<String>,
    matrix: Vec<Vector>,
}

impl FittedEncoder {
    /// Fit the transformation on the full table and encode every row
    pub fn fit(table: &PlayerTable, groups: &FeatureGroups) -> Result<Self> {
        let mut numeric_stats = Vec::with_capacity(groups.numeric.len());
        for column in &groups.numeric {
            let mut values = Vec::with_capacity(table.len());
            for id in 0..table.len() {
                values.push(table.numeric_value(id, column)?);
            }
            numeric_stats.push(ColumnStats::fit(&values));
        }

        let mut vocabularies = Vec::with_capacity(groups.categorical.len());
        for column in &groups.categorical {
            vocabularies.push(Vocabulary::fit(column_cells(table, column)?.into_iter()));
        }

        // Rank semantics are undefined for an unknown level, so fitting
        // over one is a data fault, not a zero.
        for column in &groups.ordinal {
            for id in 0..table.len() {
                let level = cell(table, id, column)?;
                if work_rate_rank(level).is_none() {
                    return Err(Error::DataFormat(format!(
                        "unknown work rate '{}' in column '{}' for player {}",
                        level, column, id
                    )));
                }
            }
        }

        let mut binary = Vec::with_capacity(groups.binary.len());
        for column in &groups.binary {
            let vocabulary = Vocabulary::fit(column_cells(table, column)?.into_iter());
            if vocabulary.len() == 2 {
                binary.push(BinaryEncoding::Collapsed {
                    positive: vocabulary.values[1].clone(),
                });
            } else {
                binary.push(BinaryEncoding::Expanded(vocabulary));
            }
        }

        let feature_names =
            build_feature_names(groups, &vocabularies, &binary);

        let mut encoder = Self {
            groups: groups.clone(),
            numeric_stats,
            vocabularies,
            binary,
            feature_names,
            matrix: Vec::new(),
        };

        let mut matrix = Vec::with_capacity(table.len());
        for id in 0..table.len() {
            matrix.push(encoder.transform_row(table, id)?);
        }
        encoder.matrix = matrix;

        Ok(encoder)
    }

    /// Apply the frozen transformation to one row of a table with the
    /// same column schema
    ///
    /// Categorical values unseen at fit time contribute all zeros; they
    /// are never an error. Work-rate levels outside the known ranks are.
    pub fn transform_row(&self, table: &PlayerTable, id: PlayerId) -> Result<Vector> {
        let mut components = Vec::with_capacity(self.output_dim());

        for (column, stats) in self.groups.numeric.iter().zip(&self.numeric_stats) {
            components.push(stats.transform(table.numeric_value(id, column)?));
        }

        for (column, vocabulary) in self.groups.categorical.iter().zip(&self.vocabularies) {
            let value = cell(table, id, column)?;
            push_one_hot(&mut components, vocabulary, value);
        }

        for column in &self.groups.ordinal {
            let level = cell(table, id, column)?;
            let rank = work_rate_rank(level).ok_or_else(|| {
                Error::DataFormat(format!(
                    "unknown work rate '{}' in column '{}' for player {}",
                    level, column, id
                ))
            })?;
            components.push(rank);
        }

        for (column, encoding) in self.groups.binary.iter().zip(&self.binary) {
            let value = cell(table, id, column)?;
            match encoding {
                BinaryEncoding::Collapsed { positive } => {
                    components.push(if value == positive { 1.0 } else { 0.0 });
                }
                BinaryEncoding::Expanded(vocabulary) => {
                    push_one_hot(&mut components, vocabulary, value);
                }
            }
        }

        Ok(Vector::new(components))
    }

    /// The fused matrix, row i being player i's feature vector
    pub fn matrix(&self) -> &[Vector] {
        &self.matrix
    }

    /// Fused vector for one player
    pub fn row_vector(&self, id: PlayerId) -> Option<&Vector> {
        self.matrix.get(id)
    }

    /// Frozen output column names, for diagnostics only
    ///
    /// Numeric names are unchanged; one-hot columns expand to
    /// `column_value`; ordinal columns keep their own names.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Length of every fused vector
    pub fn output_dim(&self) -> usize {
        self.feature_names.len()
    }

    pub fn groups(&self) -> &FeatureGroups {
        &self.groups
    }
}

fn cell<'t>(table: &'t PlayerTable, id: PlayerId, column: &str) -> Result<&'t str> {
    table
        .value(id, column)
        .ok_or_else(|| Error::MissingColumn(column.to_string()))
}

fn column_cells<'t>(table: &'t PlayerTable, column: &str) -> Result<Vec<&'t str>> {
    (0..table.len())
        .map(|id| cell(table, id, column))
        .collect()
}

fn push_one_hot(components: &mut Vec<f32>, vocabulary: &Vocabulary, value: &str) {
    let start = components.len();
    components.resize(start + vocabulary.len(), 0.0);
    if let Some(position) = vocabulary.position(value) {
        components[start + position] = 1.0;
    }
}

fn build_feature_names(
    groups: &FeatureGroups,
    vocabularies: &[Vocabulary],
    binary: &[BinaryEncoding],
) -> Vec<String> {
    let mut names: Vec<String> = groups.numeric.clone();

    for (column, vocabulary) in groups.categorical.iter().zip(vocabularies) {
        for value in &vocabulary.values {
            names.push(format!("{}_{}", column, value));
        }
    }

    names.extend(groups.ordinal.iter().cloned());

    for (column, encoding) in groups.binary.iter().zip(binary) {
        match encoding {
            BinaryEncoding::Collapsed { positive } => {
                names.push(format!("{}_{}", column, positive));
            }
            BinaryEncoding::Expanded(vocabulary) => {
                for value in &vocabulary.values {
                    names.push(format!("{}_{}", column, value));
                }
            }
        }
    }

    names
}
