use std::{
    io::{self, BufRead, Write},
    time::Duration,
};

use anyhow::{bail, Context};
use libgame::{
    movie::record_movie,
    world::{Renderer, Snapshot, World},
    LifeEngine,
};

use crate::runner::{self, RunOptions};

const HELP: &str = "\
step [n]                 advance n generations (default 1) and show the grid
run [limit] [delay_ms]   step, show and print population up to limit times (default 100, 10ms)
show                     show the current grid
population               print generation and population
neighbors <row> <col>    print the live-neighbor count of a cell
movie <skip> <frames>    skip generations, record frames, then play them back
reset                    go back to generation 0
exit                     quit";

enum Flow {
    Continue,
    Exit,
}

/// `print_population` turns on the per-step population lines of `run`; leave it off when
/// the renderer already reports population.
pub fn run_cli(engine: &mut LifeEngine, renderer: &mut dyn Renderer, print_population: bool) {
    let stdin = io::stdin();

    for line_res in stdin.lock().lines() {
        let line = match line_res {
            Ok(line) => line,
            Err(e) => {
                eprintln!("! {e:?}");
                break;
            }
        };
        let args = line.split_whitespace();

        match handle_cmd(engine, renderer, print_population, args) {
            Ok(Flow::Continue) => println!("OK"),
            Ok(Flow::Exit) => break,
            Err(e) => eprintln!("! {e:?}"),
        }
    }
}

fn handle_cmd<'a, I>(
    engine: &mut LifeEngine,
    renderer: &mut dyn Renderer,
    print_population: bool,
    mut args: I,
) -> anyhow::Result<Flow>
where
    I: Iterator<Item = &'a str>,
{
    match args.next().context("No command")? {
        "step" => {
            let times = args.next().unwrap_or("1").parse::<usize>()?;

            for _ in 0..times {
                engine.tick()?;
            }
            engine.render(renderer)?;
        }

        "run" => {
            let limit = args.next().unwrap_or("100").parse::<usize>()?;
            let delay_millis = args.next().unwrap_or("10").parse::<u64>()?;

            let options = RunOptions {
                limit: Some(limit),
                delay: Duration::from_millis(delay_millis),
                output: print_population,
                ..RunOptions::default()
            };
            runner::run(engine, renderer, &options, &mut io::stdout())?;
        }

        "show" => {
            engine.render(renderer)?;
        }

        "population" => {
            println!("{}\t{}", engine.generation(), engine.population());
        }

        "neighbors" => {
            let row = args.next().context("missing row")?.parse::<usize>()?;
            let col = args.next().context("missing col")?.parse::<usize>()?;

            let counts = engine.neighbor_counts()?;
            let count = counts
                .get([row, col])
                .with_context(|| format!("({row}, {col}) is outside of the grid"))?;
            println!("{count}");
        }

        "movie" => {
            let skip = args.next().context("missing skip")?.parse::<usize>()?;
            let frames = args.next().context("missing frame count")?.parse::<usize>()?;

            let first_generation = engine.generation() + skip as u64;
            let photos = record_movie(engine, skip, frames)?;

            for (frame, grid) in photos.iter().enumerate() {
                renderer.render(&Snapshot {
                    generation: first_generation + frame as u64,
                    population: grid.population(),
                    grid,
                })?;
            }
        }

        "reset" => {
            engine.initialize()?;
            engine.render(renderer)?;
        }

        "help" => {
            println!("{HELP}");
        }

        "exit" => {
            return Ok(Flow::Exit);
        }

        _ => bail!("Unknown command"),
    }

    io::stdout().flush()?;
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use libgame::{board::Grid, LifeConfig};

    use super::*;
    use crate::renderer::stats::StatsRenderer;

    fn blinker_engine() -> LifeEngine {
        let blinker = Grid::from_alive_cells(5, 5, [(2, 1), (2, 2), (2, 3)]).unwrap();
        LifeEngine::from_grid(&LifeConfig::for_grid(&blinker), blinker).unwrap()
    }

    fn cmd(
        engine: &mut LifeEngine,
        renderer: &mut StatsRenderer<Vec<u8>>,
        line: &str,
    ) -> anyhow::Result<Flow> {
        handle_cmd(engine, renderer, false, line.split_whitespace())
    }

    #[test]
    fn movie_frames_continue_from_current_generation() {
        let mut engine = blinker_engine();
        let mut renderer = StatsRenderer::new(Vec::new());

        cmd(&mut engine, &mut renderer, "step 2").unwrap();
        cmd(&mut engine, &mut renderer, "movie 1 3").unwrap();

        assert_eq!(engine.generation(), 6);
        assert_eq!(renderer.into_inner(), b"2\t3\n3\t3\n4\t3\n5\t3\n");
    }

    #[test]
    fn neighbors_outside_grid_is_an_error() {
        let mut engine = blinker_engine();
        let mut renderer = StatsRenderer::new(Vec::new());

        assert!(cmd(&mut engine, &mut renderer, "neighbors 5 0").is_err());
        assert!(cmd(&mut engine, &mut renderer, "neighbors 1").is_err());
        assert!(cmd(&mut engine, &mut renderer, "neighbors 1 2").is_ok());
    }

    #[test]
    fn reset_returns_to_generation_zero() {
        let mut engine = blinker_engine();
        let mut renderer = StatsRenderer::new(Vec::new());

        cmd(&mut engine, &mut renderer, "step 3").unwrap();
        cmd(&mut engine, &mut renderer, "reset").unwrap();

        assert_eq!(engine.generation(), 0);
        assert_eq!(renderer.into_inner(), b"3\t3\n0\t3\n");
    }

    #[test]
    fn run_with_stats_renderer_reports_each_step_once() {
        let mut engine = blinker_engine();
        let mut renderer = StatsRenderer::new(Vec::new());

        cmd(&mut engine, &mut renderer, "run 2 0").unwrap();

        assert_eq!(engine.generation(), 2);
        assert_eq!(renderer.into_inner(), b"1\t3\n2\t3\n");
    }

    #[test]
    fn exit_and_unknown_commands() {
        let mut engine = blinker_engine();
        let mut renderer = StatsRenderer::new(Vec::new());

        assert!(matches!(
            cmd(&mut engine, &mut renderer, "exit"),
            Ok(Flow::Exit)
        ));
        assert!(cmd(&mut engine, &mut renderer, "jump").is_err());
        assert!(cmd(&mut engine, &mut renderer, "").is_err());
    }
}
