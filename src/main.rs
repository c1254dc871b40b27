use std::time::Instant;

use anyhow::Result;
use log::info;

use gradient_gen::{gradient, output, Config};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    info!("config: {:?}", config);

    let now = Instant::now();
    let buffer = gradient::generate(&config.gradient)?;
    info!(
        "rendered {}x{} for {} s",
        buffer.width(),
        buffer.height(),
        now.elapsed().as_millis() as f32 / 1000.0
    );

    output::save(&buffer, &config.output_path, config.quality)?;
    info!("saved -> {}", config.output_path.display());

    Ok(())
}
