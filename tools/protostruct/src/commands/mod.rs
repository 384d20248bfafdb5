pub mod pack;
pub mod schema;
pub mod unpack;

use std::{fs, path::Path};

use anyhow::Result;

/// Write `text` to `output`, or print it when no path is given.
pub(crate) fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, format!("{text}\n"))?,
        None => println!("{text}"),
    }
    Ok(())
}
