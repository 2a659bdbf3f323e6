use anyhow::Result;
use std::path::Path;

pub fn run(path: Option<&Path>) -> Result<()> {
    let config = super::load_config(path)?;
    println!("{}", config.to_json_pretty()?);
    Ok(())
}
