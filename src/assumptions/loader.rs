//! CSV-based assumption loader
//!
//! Reads `parameters.csv` (columns `Parameter,Value`) from an assumptions directory.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::LoadError;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// File name of the key/value parameter table inside an assumptions directory
pub const PARAMETERS_FILE: &str = "parameters.csv";

/// Raw parameter table keyed by parameter name
#[derive(Debug, Clone, Default)]
pub struct LoadedAssumptions {
    values: HashMap<String, String>,
}

impl LoadedAssumptions {
    /// Load all assumptions from the default path
    pub fn load_default() -> Result<Self, LoadError> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all assumptions from a specific directory
    pub fn load_from(path: &Path) -> Result<Self, LoadError> {
        let file_path = path.join(PARAMETERS_FILE);
        let file = File::open(&file_path).map_err(|source| LoadError::Io {
            path: file_path.display().to_string(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Parse a parameter table from any CSV source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut values = HashMap::new();

        for result in rdr.records() {
            let record = result?;
            let key = record.get(0).unwrap_or_default().trim().to_string();
            let value = record.get(1).unwrap_or_default().trim().to_string();
            if !key.is_empty() {
                values.insert(key, value);
            }
        }

        Ok(Self { values })
    }

    /// Raw string value for a parameter
    pub fn text(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Numeric parameter, `None` if absent
    pub fn number(&self, key: &'static str) -> Result<Option<f64>, LoadError> {
        match self.text(key) {
            None => Ok(None),
            Some(raw) => raw.parse::<f64>().map(Some).map_err(|_| LoadError::Parse {
                what: key,
                value: raw.to_string(),
            }),
        }
    }

    /// Whole-number parameter, `None` if absent
    pub fn count(&self, key: &'static str) -> Result<Option<u32>, LoadError> {
        match self.text(key) {
            None => Ok(None),
            Some(raw) => raw.parse::<u32>().map(Some).map_err(|_| LoadError::Parse {
                what: key,
                value: raw.to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
