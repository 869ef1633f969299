use std::error::Error;

use once_cell::sync::Lazy;
use pipes::{
    config::SimulationConfig,
    domain::{PathReconstructor, PipeGenerator, Selectors},
    preview::plot_trail,
    simulation::PipeSimulation,
};

static CONFIG: Lazy<SimulationConfig> = Lazy::new(SimulationConfig::from_env);

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let config = &*CONFIG;
    log::info!("{config:?}");

    let selectors = match config.seed {
        Some(seed) => Selectors::seeded(seed, config.grid),
        None => Selectors::random(config.grid),
    };
    let mut generator = PipeGenerator::new(selectors)
        .with_saturation_and_lightness(config.saturation, config.lightness);

    let simulation = PipeSimulation::generate(&mut generator, config)?;
    let reconstructor = PathReconstructor::new();

    for (i, pipe) in simulation.pipes().iter().enumerate() {
        let trail = pipe.trail(&reconstructor)?;
        println!("pipe {i}");
        println!("  color: {}", pipe.color.serialize());
        println!("  start: {}", pipe.starting_position.serialize());
        println!("  trail: {trail}");
        println!("{}", plot_trail(&trail));
    }

    Ok(())
}
