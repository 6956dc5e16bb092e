use std::error::Error;
use std::path::PathBuf;

use chrono::Utc;
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use standup_core::Config;

use super::common::{open_service, require_moderator};

pub fn run(
    data_file: Option<PathBuf>,
    days: Option<u32>,
    seed: Option<u64>,
    password: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let config = Config::load_or_default();
    require_moderator(&config, password)?;

    let service = open_service(&config, data_file)?;
    let days = days.unwrap_or(config.window_days);

    let mut rng = match seed {
        Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
        None => Mcg128Xsl64::from_entropy(),
    };

    match service.pick_random(days, Utc::now(), &mut rng)? {
        Some(pick) => {
            println!("{} ({})", pick.user, pick.date);
            println!("progress: {}", pick.submission.progress);
            println!("question: {}", pick.submission.question);
        }
        None => println!("no reports in the last {days} days"),
    }
    Ok(())
}
