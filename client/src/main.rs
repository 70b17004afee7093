use std::{env, fs, io};

use anyhow::{bail, Context};
use libgame::{world::Renderer, LifeConfig, LifeEngine};
use renderer::{stats::StatsRenderer, text::TextRenderer};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod renderer;
mod runner;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = env::args().skip(1);

    let config = match args.next().filter(|config_path| config_path != "-") {
        Some(config_path) => load_config(&config_path)?,
        None => LifeConfig::default(),
    };

    // The stats renderer already prints population, so `run` doesn't repeat it.
    let (mut renderer, print_population): (Box<dyn Renderer>, bool) =
        match args.next().as_deref().unwrap_or("text") {
            "text" => (Box::new(TextRenderer::new(io::stdout(), true)), true),
            "stats" => (Box::new(StatsRenderer::new(io::stdout())), false),
            other => bail!("Unknown renderer {other:?}, expected \"text\" or \"stats\""),
        };

    let mut engine = LifeEngine::new(&config).context("Couldn't create life engine")?;

    info!(
        rows = config.rows,
        cols = config.cols,
        birth_rate = ?config.birth_rate,
        "Ready, type \"help\" for commands"
    );

    cli::run_cli(&mut engine, renderer.as_mut(), print_population);

    renderer.finish().context("Couldn't tear down renderer")?;
    Ok(())
}

fn load_config(path: &str) -> anyhow::Result<LifeConfig> {
    let config_serialized = fs::read(path).context("Couldn't read config")?;
    let config: LifeConfig =
        serde_json::from_slice(&config_serialized).context("Couldn't deserialize config")?;

    config.validate().context("Invalid config")?;
    Ok(config)
}
