use std::error::Error;
use std::path::PathBuf;

use chrono::Utc;
use standup_core::Config;

use super::common::{open_service, require_moderator};

pub fn run(
    data_file: Option<PathBuf>,
    days: Option<u32>,
    password: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let config = Config::load_or_default();
    require_moderator(&config, password)?;

    let service = open_service(&config, data_file)?;
    let days = days.unwrap_or(config.window_days);

    let history = service.history(days, Utc::now())?;
    if history.is_empty() {
        println!("no reports in the last {days} days");
        return Ok(());
    }

    for (date, bucket) in history {
        println!("### {date}");
        for (user, sub) in bucket {
            println!("  {user} ({})", sub.submitted_at);
            println!("    progress: {}", sub.progress);
            println!("    question: {}", sub.question);
        }
    }
    Ok(())
}
