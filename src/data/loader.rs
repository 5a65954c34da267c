use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{ConvertError, Result};

use super::model::{Row, Table};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a CSV file into a [`Table`].
///
/// CSV layout: header row with column names, one record per following line.
/// Every cell is kept as text; nothing is coerced to numbers or booleans.
pub fn load_csv(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|e| ConvertError::Csv {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    read_table(file, path)
}

/// Same as [`load_csv`] but reads from any byte source. `origin` only labels
/// errors.
pub fn read_table<R: Read>(input: R, origin: &Path) -> Result<Table> {
    let reader = csv::ReaderBuilder::new().has_headers(true).from_reader(input);
    collect_table(reader, origin)
}

// ---------------------------------------------------------------------------
// Record collection
// ---------------------------------------------------------------------------

/// Drain `reader` into a table.
///
/// The reader is not flexible: a record whose field count differs from the
/// header fails with `UnequalLengths` and aborts the whole table.
fn collect_table<R: Read>(mut reader: csv::Reader<R>, origin: &Path) -> Result<Table> {
    let csv_err = |source| ConvertError::Csv {
        path: origin.to_path_buf(),
        source,
    };

    let header: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut table = Table::new(header);

    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        let row = Row::from_record(&table.header, record.iter());
        table.rows.push(row);
    }

    log::debug!(
        "Parsed {} rows with columns {:?} from {}",
        table.len(),
        table.header,
        origin.display()
    );

    Ok(table)
}
