//! Feature group partition
//!
//! Columns are partitioned by named membership, not type inference: the
//! schema is known in advance, so a schema change means editing these
//! lists rather than retraining any inference logic. Every column lands in
//! exactly one of five sets; whatever is not named is numeric.

use crate::dataset::{PlayerTable, ATK_WORKRATE_COLUMN, DEF_WORKRATE_COLUMN, WORK_RATE_COLUMN};
use ahash::AHashSet;
use scoutx_core::{Error, Result};

/// Nominal columns, one-hot encoded
pub const CATEGORICAL_COLUMNS: [&str; 3] = ["country", "club", "best_position"];

/// Rank-ordered columns derived from the composite work rate
pub const ORDINAL_COLUMNS: [&str; 2] = [ATK_WORKRATE_COLUMN, DEF_WORKRATE_COLUMN];

/// Two-valued columns collapsed to a single 0/1 feature
pub const BINARY_COLUMNS: [&str; 1] = ["preferred_foot"];

/// Identity and text columns excluded from similarity
///
/// `id` is listed defensively: identifiers are assigned from row position
/// at load time, so a source identifier column must never become a
/// feature. `first_name`/`last_name` may be absent from leaner exports.
pub const DROP_COLUMNS: [&str; 5] = ["name", "first_name", "last_name", WORK_RATE_COLUMN, "id"];

/// The five-way column partition for one loaded table
///
/// Static after the first load: the numeric set is computed once by
/// order-preserving exclusion over the table's stable column list, so the
/// fused output layout is reproducible across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureGroups {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
    pub ordinal: Vec<String>,
    pub binary: Vec<String>,
    pub dropped: Vec<String>,
}

impl FeatureGroups {
    /// Partition the table's columns
    ///
    /// Fails with `MissingColumn` when a column the partition names as a
    /// feature (or the `name` lookup column) is absent. Drop columns other
    /// than `name` and `work_rate` are optional.
    pub fn for_table(table: &PlayerTable) -> Result<Self> {
        for column in CATEGORICAL_COLUMNS
            .iter()
            .chain(ORDINAL_COLUMNS.iter())
            .chain(BINARY_COLUMNS.iter())
            .chain(["name", WORK_RATE_COLUMN].iter())
        {
            if !table.has_column(column) {
                return Err(Error::MissingColumn(column.to_string()));
            }
        }

        let named: AHashSet<&str> = CATEGORICAL_COLUMNS
            .iter()
            .chain(ORDINAL_COLUMNS.iter())
            .chain(BINARY_COLUMNS.iter())
            .chain(DROP_COLUMNS.iter())
            .copied()
            .collect();

        // Order-preserving walk over the stable column list, never a set
        let numeric: Vec<String> = table
            .column_names()
            .iter()
            .filter(|column| !named.contains(column.as_str()))
            .cloned()
            .collect();

        let dropped: Vec<String> = DROP_COLUMNS
            .iter()
            .filter(|column| table.has_column(column))
            .map(|column| column.to_string())
            .collect();

        Ok(Self {
            numeric,
            categorical: CATEGORICAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
            ordinal: ORDINAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
            binary: BINARY_COLUMNS.iter().map(|c| c.to_string()).collect(),
            dropped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> PlayerTable {
        let columns = [
            "name",
            "first_name",
            "last_name",
            "age",
            "overall",
            "country",
            "club",
            "best_position",
            "preferred_foot",
            "work_rate",
            "pace",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let row = [
            "Ada Striker",
            "Ada",
            "Striker",
            "24",
            "81",
            "Brazil",
            "FC Example",
            "ST",
            "Right",
            "High/Medium",
            "88",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        PlayerTable::from_rows(columns, vec![row]).unwrap()
    }

    #[test]
    fn test_partition_covers_every_column_once() {
        let table = sample_table();
        let groups = FeatureGroups::for_table(&table).unwrap();

        let mut partitioned: Vec<&String> = groups
            .numeric
            .iter()
            .chain(groups.categorical.iter())
            .chain(groups.ordinal.iter())
            .chain(groups.binary.iter())
            .chain(groups.dropped.iter())
            .collect();
        partitioned.sort();

        let mut all: Vec<&String> = table.column_names().iter().collect();
        all.sort();

        assert_eq!(partitioned, all);
    }

    #[test]
    fn test_numeric_preserves_table_order() {
        let table = sample_table();
        let groups = FeatureGroups::for_table(&table).unwrap();
        assert_eq!(groups.numeric, vec!["age", "overall", "pace"]);
    }

    #[test]
    fn test_source_id_column_is_dropped() {
        let columns = ["name", "id", "age", "country", "club", "best_position", "preferred_foot", "work_rate"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let row = ["A", "9999", "21", "Chile", "CF Test", "CB", "Left", "Low/High"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let table = PlayerTable::from_rows(columns, vec![row]).unwrap();

        let groups = FeatureGroups::for_table(&table).unwrap();
        assert!(groups.dropped.contains(&"id".to_string()));
        assert!(!groups.numeric.contains(&"id".to_string()));
    }

    #[test]
    fn test_missing_categorical_column() {
        let columns = ["name", "age", "preferred_foot", "work_rate"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let row = ["A", "21", "Right", "High/Low"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let table = PlayerTable::from_rows(columns, vec![row]).unwrap();

        let result = FeatureGroups::for_table(&table);
        assert!(matches!(result, Err(Error::MissingColumn(c)) if c == "country"));
    }
}
