use anyhow::{Context, Result};

use hw_csv_to_js::{convert_all, Config};

fn main() -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();

    let config = Config::default();
    let converted = convert_all(&config)
        .with_context(|| format!("converting CSV files under {}", config.root.display()))?;

    log::debug!("Done: {} conversion unit(s)", converted.len());
    Ok(())
}
