use std::path::PathBuf;

use serde::ser::{Serialize, SerializeMap, Serializer};

// ---------------------------------------------------------------------------
// Row – one data record keyed by header column
// ---------------------------------------------------------------------------

/// A single CSV record mapped onto the header columns.
///
/// Keys keep the order of their first appearance in the header. A header
/// name that appears twice keeps its first position but takes the value of
/// the later column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    /// Zip `header` with `values` positionally.
    ///
    /// Both slices are expected to have the same length; the loader rejects
    /// records where they differ before building a row.
    pub fn from_record<'a, I>(header: &[String], values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut row = Row {
            fields: Vec::with_capacity(header.len()),
        };
        for (key, value) in header.iter().zip(values) {
            row.insert(key, value);
        }
        row
    }

    /// Insert or overwrite a column value.
    pub fn insert(&mut self, key: &str, value: &str) {
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.fields.push((key.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Column names in output order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Table – all rows of one CSV file
// ---------------------------------------------------------------------------

/// The parsed contents of one CSV file. Serializes as a plain array of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Table {
    /// Header columns, verbatim from the first line.
    #[serde(skip)]
    pub header: Vec<String>,
    /// Data rows in file order.
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(header: Vec<String>) -> Self {
        Table {
            header,
            rows: Vec::new(),
        }
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// ConversionUnit – source CSV and the file generated from it
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionUnit {
    pub source: PathBuf,
    pub output: PathBuf,
}
