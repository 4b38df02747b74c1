//! # progressive
//!
//! Prints the dashboard of the local workout history: totals, the latest
//! workout and the personal record for every exercise.

use tracing::info;

use progressive_client::format::{format_date, format_load, format_volume, workout_details};
use progressive_client::{init_tracing, AppState, ClientConfig};
use progressive_shared::constants::APP_NAME;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting {} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let config = ClientConfig::from_env();
    info!(?config, "Loaded configuration");

    let app = AppState::open(&config)?;

    let profile = app.profile.load().await?;
    let summary = app.dashboard().await?;

    println!("Hello, {}!", profile.display_name);
    println!();
    println!("Workouts completed: {}", summary.completed);
    println!("Total volume:       {}", format_volume(summary.total_volume));

    if let Some(latest) = &summary.most_recent {
        println!();
        println!("Last workout: {} ({})", latest.name, format_date(&latest.date));
        for line in workout_details(latest) {
            println!("  - {line}");
        }
    }

    let records = app.personal_records().await?;
    if !records.is_empty() {
        println!();
        println!("Personal records:");
        for record in records {
            println!(
                "  {}: {}kg x {} ({})",
                record.exercise,
                format_load(record.set.load),
                record.set.reps,
                format_date(&record.workout_date)
            );
        }
    }

    Ok(())
}
