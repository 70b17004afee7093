use std::{io::Write, time::Duration};

use anyhow::Context;
use libgame::world::{Renderer, World};

use crate::renderer::sleeper::Sleeper;

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Number of steps to run, `None` runs forever.
    pub limit: Option<usize>,

    /// Minimum time between rendered frames.
    pub delay: Duration,

    /// Print `step<TAB>population` after every step.
    pub output: bool,

    /// Render every step.
    pub display: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            limit: None,
            delay: Duration::from_millis(10),
            output: true,
            display: true,
        }
    }
}

/// Steps `world` until the limit is reached, returning the number of steps taken.
pub fn run<W, D, O>(
    world: &mut W,
    renderer: &mut D,
    options: &RunOptions,
    out: &mut O,
) -> anyhow::Result<usize>
where
    W: World,
    D: Renderer + ?Sized,
    O: Write,
{
    let mut sleeper = Sleeper::new(options.delay);

    let mut steps = 0;
    while options.limit.map_or(true, |limit| steps < limit) {
        world.step().context("Couldn't step world")?;
        steps += 1;

        if options.display {
            if !options.delay.is_zero() {
                sleeper.sleep();
            }
            world.render(renderer).context("Couldn't render world")?;
        }

        if options.output {
            writeln!(out, "{}\t{}", steps, world.snapshot().population)?;
        }
    }

    Ok(steps)
}
