// main.rs - Terminal driver for the simulation

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use log::info;

use conway::{CycleDetector, LifeConfig, config, step, step_coroutines};

mod render;

use render::ConsoleRenderer;

#[derive(Parser)]
#[command(name = "grid_display", about = "Run Conway's Game of Life in the terminal")]
struct Args {
    /// Rows and columns of the board
    #[arg(long, default_value_t = config::DEFAULT_SIZE)]
    size: usize,

    /// Milliseconds between generations
    #[arg(
        long,
        default_value_t = config::DEFAULT_INTERVAL.as_millis() as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    interval_ms: u64,

    /// Seed for a reproducible random start
    #[arg(long)]
    seed: Option<u64>,

    /// Chance of each random cell starting alive (0.0 to 1.0)
    #[arg(long)]
    density: Option<f64>,

    /// Stop after this many generations
    #[arg(long)]
    generations: Option<u64>,

    /// Start from a named pattern (Glider, Pulsar, ...) instead of random cells
    #[arg(long)]
    pattern: Option<String>,

    /// Step with one coroutine per row
    #[arg(long)]
    coroutines: bool,

    /// Stop once the board repeats a recent generation
    #[arg(long)]
    stop_on_cycle: bool,

    /// Print frames one after another instead of redrawing the screen
    #[arg(long)]
    plain: bool,
}

impl Args {
    fn config(&self) -> LifeConfig {
        LifeConfig {
            size: self.size,
            interval: Duration::from_millis(self.interval_ms),
            seed: self.seed,
            generations: self.generations,
            density: self.density,
            pattern: self.pattern.clone(),
            coroutines: self.coroutines,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.config();

    let stdout = io::stdout();
    let renderer = if args.plain {
        ConsoleRenderer::plain(stdout)
    } else {
        ConsoleRenderer::new(stdout)
    };

    let generations = drive(&config, args.stop_on_cycle, renderer).await?;
    info!("finished after {generations} generations");
    Ok(())
}

/// Shortest pause between generations; tokio intervals cannot be zero.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Renders generation 0, then steps and renders once per interval.
/// Returns the number of generations computed.
async fn drive<W: Write>(
    config: &LifeConfig,
    stop_on_cycle: bool,
    mut renderer: ConsoleRenderer<W>,
) -> anyhow::Result<u64> {
    let mut grid = config.initial_grid().context("failed to build the starting grid")?;
    let mut history = CycleDetector::default();
    let mut ticker = tokio::time::interval(config.interval.max(MIN_INTERVAL));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut generation = 0;
    ticker.tick().await; // The first tick completes immediately
    renderer.render(&grid, generation)?;
    history.observe(&grid);

    loop {
        if config.generations.is_some_and(|limit| generation >= limit) {
            break;
        }

        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut ctrl_c => {
                info!("interrupted at generation {generation}");
                break;
            }
        }

        grid = if config.coroutines {
            step_coroutines(Arc::new(grid)).await?
        } else {
            step(&grid)
        };
        generation += 1;
        renderer.render(&grid, generation)?;

        if history.observe(&grid) && stop_on_cycle {
            info!("generation {generation} repeats an earlier one, stopping");
            break;
        }
    }

    Ok(generation)
}
