//! Player dataset loading
//!
//! Reads the tabular player source into an in-memory table indexed by a
//! dense 0-based identifier, and derives the engineered work-rate columns.
//! Columns are dynamic: the table keeps whatever the source provides, and
//! the feature partition decides later what each column is used for.

use ahash::AHashMap;
use scoutx_core::{Error, Result};
use std::path::Path;

/// Stable row identifier: a player's position in the table at load time.
///
/// Identifiers form the dense range `[0, len)` and never change after
/// load; they are the join key between the raw table and the fused
/// feature matrix.
pub type PlayerId = usize;

/// Composite column split into the two engineered work-rate columns
pub const WORK_RATE_COLUMN: &str = "work_rate";

/// Engineered column: attacking work rate (left half of `work_rate`)
pub const ATK_WORKRATE_COLUMN: &str = "atk_workrate";

/// Engineered column: defensive work rate (right half of `work_rate`)
pub const DEF_WORKRATE_COLUMN: &str = "def_workrate";

/// In-memory player table with dense 0-based row identifiers
#[derive(Debug, Clone)]
pub struct PlayerTable {
    columns: Vec<String>,
    column_index: AHashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl PlayerTable {
    /// Build a table from raw column names and row cells, deriving the
    /// work-rate columns.
    ///
    /// Row order fixes the identifier space. Every row must contain a
    /// `work_rate` cell of the form `Atk/Def`; both halves are trimmed
    /// and appended as the `atk_workrate` / `def_workrate` columns.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let mut column_index = AHashMap::with_capacity(columns.len() + 2);
        for (position, name) in columns.iter().enumerate() {
            if column_index.insert(name.clone(), position).is_some() {
                return Err(Error::DataFormat(format!(
                    "duplicate column '{}' in source table",
                    name
                )));
            }
        }

        for (id, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(Error::DataFormat(format!(
                    "row {} has {} cells, expected {}",
                    id,
                    row.len(),
                    columns.len()
                )));
            }
        }

        let mut table = Self {
            columns,
            column_index,
            rows,
        };
        table.derive_work_rates()?;
        Ok(table)
    }

    /// Split the composite work-rate column into its two ordinal halves
    fn derive_work_rates(&mut self) -> Result<()> {
        let source = self
            .column_index
            .get(WORK_RATE_COLUMN)
            .copied()
            .ok_or_else(|| Error::MissingColumn(WORK_RATE_COLUMN.to_string()))?;

        for (id, row) in self.rows.iter_mut().enumerate() {
            let composite = &row[source];
            let (atk, def) = composite.split_once('/').ok_or_else(|| {
                Error::DataFormat(format!(
                    "work_rate '{}' for player {} is not of the form 'Atk/Def'",
                    composite, id
                ))
            })?;
            let atk = atk.trim().to_string();
            let def = def.trim().to_string();
            row.push(atk);
            row.push(def);
        }

        self.column_index
            .insert(ATK_WORKRATE_COLUMN.to_string(), self.columns.len());
        self.columns.push(ATK_WORKRATE_COLUMN.to_string());
        self.column_index
            .insert(DEF_WORKRATE_COLUMN.to_string(), self.columns.len());
        self.columns.push(DEF_WORKRATE_COLUMN.to_string());

        Ok(())
    }

    /// Number of players in the table
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in stable order: source order, then the derived
    /// work-rate columns.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index.contains_key(name)
    }

    /// Cell value for a player, by column name
    pub fn value(&self, id: PlayerId, column: &str) -> Option<&str> {
        let position = *self.column_index.get(column)?;
        self.rows.get(id).map(|row| row[position].as_str())
    }

    /// Cell value parsed as a number
    ///
    /// A cell that does not parse is a data-format fault: numeric columns
    /// are expected to be numeric for every row.
    pub fn numeric_value(&self, id: PlayerId, column: &str) -> Result<f64> {
        let raw = self
            .value(id, column)
            .ok_or_else(|| Error::MissingColumn(column.to_string()))?;
        raw.parse::<f64>().map_err(|_| {
            Error::DataFormat(format!(
                "column '{}' holds non-numeric value '{}' for player {}",
                column, raw, id
            ))
        })
    }
}

/// Load the player table from a CSV file with a header row
///
/// Cells are trimmed. Row position becomes the player identifier; any
/// identifier column in the source is ignored by the feature partition,
/// never trusted.
pub fn load_players<P: AsRef<Path>>(path: P) -> Result<PlayerTable> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| Error::Csv(e.to_string()))?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| Error::Csv(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::Csv(e.to_string()))?;
        rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
    }

    PlayerTable::from_rows(columns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn columns() -> Vec<String> {
        ["name", "age", "work_rate", "preferred_foot"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn row(name: &str, age: &str, work_rate: &str, foot: &str) -> Vec<String> {
        vec![
            name.to_string(),
            age.to_string(),
            work_rate.to_string(),
            foot.to_string(),
        ]
    }

    #[test]
    fn test_work_rate_split_and_trim() {
        let table = PlayerTable::from_rows(
            columns(),
            vec![
                row("A", "21", "High/ Medium", "Right"),
                row("B", "30", "Low/Low", "Left"),
            ],
        )
        .unwrap();

        assert_eq!(table.value(0, ATK_WORKRATE_COLUMN), Some("High"));
        assert_eq!(table.value(0, DEF_WORKRATE_COLUMN), Some("Medium"));
        assert_eq!(table.value(1, ATK_WORKRATE_COLUMN), Some("Low"));
        assert_eq!(table.value(1, DEF_WORKRATE_COLUMN), Some("Low"));

        // Derived columns appended after source columns, in order
        let names = table.column_names();
        assert_eq!(&names[names.len() - 2..], &[
            ATK_WORKRATE_COLUMN.to_string(),
            DEF_WORKRATE_COLUMN.to_string()
        ]);
    }

    #[test]
    fn test_missing_work_rate_column() {
        let result = PlayerTable::from_rows(
            vec!["name".to_string(), "age".to_string()],
            vec![vec!["A".to_string(), "21".to_string()]],
        );
        assert!(matches!(result, Err(Error::MissingColumn(c)) if c == "work_rate"));
    }

    #[test]
    fn test_unsplittable_work_rate_cell() {
        let result = PlayerTable::from_rows(columns(), vec![row("A", "21", "High", "Right")]);
        assert!(matches!(result, Err(Error::DataFormat(_))));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let result = PlayerTable::from_rows(
            vec!["name".to_string(), "name".to_string(), "work_rate".to_string()],
            Vec::new(),
        );
        assert!(matches!(result, Err(Error::DataFormat(_))));
    }

    #[test]
    fn test_ragged_row_rejected() {
        let result = PlayerTable::from_rows(
            columns(),
            vec![vec!["A".to_string(), "21".to_string()]],
        );
        assert!(matches!(result, Err(Error::DataFormat(_))));
    }

    #[test]
    fn test_numeric_value() {
        let table =
            PlayerTable::from_rows(columns(), vec![row("A", "21", "High/Medium", "Right")])
                .unwrap();
        assert_eq!(table.numeric_value(0, "age").unwrap(), 21.0);
        assert!(matches!(
            table.numeric_value(0, "name"),
            Err(Error::DataFormat(_))
        ));
        assert!(matches!(
            table.numeric_value(0, "height"),
            Err(Error::MissingColumn(_))
        ));
    }

    #[test]
    fn test_load_players_from_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,age,work_rate,preferred_foot").unwrap();
        writeln!(file, "Ada Striker,24,High/Medium,Right").unwrap();
        writeln!(file, "Bo Keeper,31, Low / Low ,Left").unwrap();
        file.flush().unwrap();

        let table = load_players(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.value(0, "name"), Some("Ada Striker"));
        assert_eq!(table.value(1, ATK_WORKRATE_COLUMN), Some("Low"));
        assert_eq!(table.value(1, DEF_WORKRATE_COLUMN), Some("Low"));
    }

    #[test]
    fn test_load_players_missing_file() {
        let result = load_players("/definitely/not/here.csv");
        assert!(matches!(result, Err(Error::Csv(_))));
    }
}
