use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use hw_csv_to_js::sample::{write_sample, DEFAULT_SEED, ROWS_PER_SPECIES};

fn main() -> Result<()> {
    let dir = Path::new("312540006_hw_sample");
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let output_path = dir.join("iris.csv");
    let file = File::create(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    let rows = write_sample(BufWriter::new(file), ROWS_PER_SPECIES, DEFAULT_SEED)
        .with_context(|| format!("writing {}", output_path.display()))?;

    println!("Wrote {rows} rows to {}", output_path.display());
    Ok(())
}
