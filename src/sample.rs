//! Synthetic iris measurements for trying the converter on a fresh checkout.

use std::io::Write;

/// Column layout of the generated file.
pub const HEADER: [&str; 5] = [
    "sepal_length",
    "sepal_width",
    "petal_length",
    "petal_width",
    "species",
];

pub const DEFAULT_SEED: u64 = 42;
pub const ROWS_PER_SPECIES: usize = 50;

/// Species name, typical measurements, and how far a sample may stray from them (cm).
const SPECIES: [(&str, [f64; 4], [f64; 4]); 3] = [
    ("setosa", [5.0, 3.4, 1.5, 0.2], [0.6, 0.6, 0.3, 0.2]),
    ("versicolor", [5.9, 2.8, 4.3, 1.3], [0.9, 0.5, 0.8, 0.3]),
    ("virginica", [6.6, 3.0, 5.5, 2.0], [1.1, 0.6, 0.9, 0.4]),
];

/// SplitMix64 stream; one value per measurement.
struct Jitter(u64);

impl Jitter {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform offset in `[-spread, spread)`.
    fn offset(&mut self, spread: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        (unit * 2.0 - 1.0) * spread
    }
}

/// Write a header plus `rows_per_species` rows for each of the three species.
///
/// Measurements are rounded to one decimal and never drop below 0.1. The same
/// seed always yields the same bytes. Returns the number of data rows written.
pub fn write_sample<W: Write>(out: W, rows_per_species: usize, seed: u64) -> csv::Result<usize> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(HEADER)?;

    let mut jitter = Jitter(seed);
    let mut rows = 0;
    for (species, typical, spread) in &SPECIES {
        for _ in 0..rows_per_species {
            let mut record: Vec<String> = typical
                .iter()
                .zip(spread)
                .map(|(&cm, &s)| format!("{:.1}", (cm + jitter.offset(s)).max(0.1)))
                .collect();
            record.push(species.to_string());
            writer.write_record(&record)?;
            rows += 1;
        }
    }
    writer.flush()?;
    Ok(rows)
}
