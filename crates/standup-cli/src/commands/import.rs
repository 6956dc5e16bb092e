use std::error::Error;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Utc};
use standup_core::{legacy, Config};

use super::common::{open_store, require_moderator};

pub fn run(
    data_file: Option<PathBuf>,
    dir: &Path,
    year: Option<i32>,
    password: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let config = Config::load_or_default();
    require_moderator(&config, password)?;

    let store = open_store(&config, data_file)?;
    let year = year.unwrap_or_else(|| Utc::now().year());

    let imported = legacy::import_dir(dir, year, &store)?;
    println!("imported {imported} submissions from {}", dir.display());
    Ok(())
}
