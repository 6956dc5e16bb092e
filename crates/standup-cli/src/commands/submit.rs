use std::error::Error;
use std::path::PathBuf;

use chrono::Utc;
use standup_core::Config;

use super::common::open_service;

pub fn run(
    data_file: Option<PathBuf>,
    user: &str,
    progress: &str,
    question: &str,
) -> Result<(), Box<dyn Error>> {
    let config = Config::load_or_default();
    let service = open_service(&config, data_file)?;

    let ack = service.submit(user, progress, question, Utc::now())?;
    println!(
        "recorded {} for {} at {} (resubmitting today replaces it)",
        ack.date, ack.user, ack.submitted_at
    );
    Ok(())
}
