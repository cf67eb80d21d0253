use super::{ActionValueTable, QValue};
use crate::error::{HestiaError, Result};
use crate::types::{Action, State};
use ndarray::Array1;
use std::collections::BTreeMap;
use std::path::Path;

/// On-disk layout: state text -> (action tag -> value)
pub type TableSnapshot = BTreeMap<String, BTreeMap<String, QValue>>;

/// Encoding used for a saved table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Json,
    Bincode,
}

impl TableFormat {
    /// `.bin` files use bincode, everything else JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("bin") => TableFormat::Bincode,
            _ => TableFormat::Json,
        }
    }

    pub fn encode(&self, snapshot: &TableSnapshot) -> Result<Vec<u8>> {
        match self {
            TableFormat::Json => Ok(serde_json::to_vec_pretty(snapshot)?),
            TableFormat::Bincode => Ok(bincode::serialize(snapshot)?),
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<TableSnapshot> {
        match self {
            TableFormat::Json => Ok(serde_json::from_slice(bytes)?),
            TableFormat::Bincode => Ok(bincode::deserialize(bytes)?),
        }
    }
}

impl ActionValueTable {
    /// String-keyed copy of the table
    pub fn to_snapshot(&self) -> TableSnapshot {
        self.rows
            .iter()
            .map(|(state, row)| {
                let values = Action::ALL
                    .iter()
                    .map(|action| (action.to_string(), row[action.index()]))
                    .collect();
                (state.to_string(), values)
            })
            .collect()
    }

    /// Rebuild a table from a snapshot
    ///
    /// Every row must carry a value for every action, and no two keys may
    /// name the same state. States missing from the snapshot get zero rows.
    pub fn from_snapshot(snapshot: &TableSnapshot) -> Result<Self> {
        let mut table = ActionValueTable {
            rows: BTreeMap::new(),
        };

        for (key, values) in snapshot {
            let state: State = key.parse()?;
            let mut row = Array1::zeros(Action::COUNT);
            let mut seen = [false; Action::COUNT];

            for (tag, value) in values {
                let action: Action = tag.parse()?;
                row[action.index()] = *value;
                seen[action.index()] = true;
            }
            if let Some(missing) = Action::ALL.iter().find(|a| !seen[a.index()]) {
                return Err(HestiaError::SerializationError(format!(
                    "row [{}] has no value for {}",
                    key, missing
                )));
            }
            if table.rows.insert(state, row).is_some() {
                return Err(HestiaError::SerializationError(format!(
                    "more than one row for state [{}]",
                    state
                )));
            }
        }

        let missing = State::all()
            .into_iter()
            .filter(|state| !table.contains(state))
            .count();
        if missing > 0 {
            log::warn!("Saved table lacks {} states, adding zero rows", missing);
            for state in State::all() {
                table.ensure_row(state);
            }
        }

        Ok(table)
    }

    /// Save to `path`, choosing the encoding from the extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = TableFormat::from_path(path).encode(&self.to_snapshot())?;
        std::fs::write(path, bytes)?;
        log::info!("Saved action-value table ({} states) to {}", self.len(), path.display());
        Ok(())
    }

    /// Load from `path`, choosing the encoding from the extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let snapshot = TableFormat::from_path(path).decode(&bytes)?;
        let table = Self::from_snapshot(&snapshot)?;
        log::info!("Loaded action-value table ({} states) from {}", table.len(), path.display());
        Ok(table)
    }

    /// Load from `path`, or start from zeros if the file is missing or malformed
    pub fn load_or_fresh<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No saved table at {}, starting from zeros", path.display());
            return Self::new();
        }
        match Self::load(path) {
            Ok(table) => table,
            Err(e) => {
                log::warn!("Ignoring saved table at {}: {}", path.display(), e);
                Self::new()
            }
        }
    }

    /// Delete a saved table so the next run starts from zeros
    pub fn discard_saved<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if path.exists() {
            std::fs::remove_file(path)?;
            log::info!("Removed saved table {}", path.display());
        }
        Ok(())
    }
}
