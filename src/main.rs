use anyhow::Result;
use bootstrap_se::{Study, StudyConfig};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let start = Instant::now();

    let config = StudyConfig::default();
    println!("\n{config}");

    let study = Study::new(config)?;
    let results = study.run()?;
    let report = study.report(&results)?;
    tracing::info!(seed = study.config().seed, rows = results.len(), "Report ready");

    println!("\n{report}");
    println!("\n----- Run Complete -----");
    println!("Elapsed time: {:.2} seconds", start.elapsed().as_secs_f64());

    Ok(())
}
