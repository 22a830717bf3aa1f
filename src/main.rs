//! Geometry - evaluates vector algebra on configured inputs and prints the results

use geometry::config::AppConfig;
use geometry::report::VectorReport;
use geometry::Matrix4x4f;

fn main() {
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // RUST_LOG still takes precedence over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting geometry");

    let report = VectorReport::compute(&config.vectors);
    println!("{}", report);

    if report.normal == geometry::Vec3f::ZERO {
        log::warn!("Input vectors are parallel; no unique normal");
    }

    if config.matrix.print_identity {
        println!();
        println!("{}", Matrix4x4f::default());
    }

    log::info!("Done");
}
