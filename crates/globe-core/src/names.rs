use crate::constants::NAME_OVERRIDES;
use crate::error::{GlobeError, Result};
use fnv::FnvHashMap;

/// Country display names keyed by the canonical integer id.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: FnvHashMap<i32, String>,
}

impl NameTable {
    /// Parse a tab-separated table with `id` and `name` columns. Rows whose id
    /// is not an integer are skipped.
    pub fn from_tsv(text: &str) -> Result<Self> {
        let mut lines = text.lines().filter(|l| !l.trim().is_empty());
        let header: Vec<&str> = lines
            .next()
            .map(|h| h.split('\t').map(str::trim).collect())
            .unwrap_or_default();
        let col = |name: &'static str| {
            header
                .iter()
                .position(|h| *h == name)
                .ok_or(GlobeError::MissingColumn(name))
        };
        let (id_col, name_col) = (col("id")?, col("name")?);

        let mut names = FnvHashMap::default();
        let mut skipped = 0usize;
        for line in lines {
            let fields: Vec<&str> = line.split('\t').collect();
            let id = fields.get(id_col).and_then(|s| s.trim().parse::<i32>().ok());
            match (id, fields.get(name_col)) {
                (Some(id), Some(name)) => {
                    names.insert(id, name.trim().to_string());
                }
                _ => skipped += 1,
            }
        }
        if skipped > 0 {
            log::warn!("[load] skipped {} country-name rows without an integer id", skipped);
        }

        let mut table = Self { names };
        for &(id, name) in NAME_OVERRIDES {
            table.insert(id, name);
        }
        Ok(table)
    }

    pub fn insert(&mut self, id: i32, name: &str) {
        self.names.insert(id, name.to_string());
    }

    pub fn get(&self, id: i32) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Display name for an optional feature id; empty when unknown.
    pub fn label(&self, id: Option<i32>) -> &str {
        id.and_then(|id| self.get(id)).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
