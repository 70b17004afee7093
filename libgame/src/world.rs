use std::io;

use rand::Rng;

use crate::{board::Grid, engine::LifeEngine, error::LifeError};

/// Read-only view of a world handed to renderers after each step.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub generation: u64,
    pub population: usize,
    pub grid: &'a Grid,
}

/// Something that can display snapshots. Owned by the caller, who creates it before the
/// first frame and calls [`Renderer::finish`] once done with it.
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub trait World {
    /// Puts the world back into its starting state at generation 0.
    fn initialize(&mut self) -> Result<(), LifeError>;

    fn step(&mut self) -> Result<(), LifeError>;

    fn snapshot(&self) -> Snapshot<'_>;

    fn render<D>(&self, renderer: &mut D) -> io::Result<()>
    where
        D: Renderer + ?Sized,
    {
        renderer.render(&self.snapshot())
    }
}

impl<R> World for LifeEngine<R>
where
    R: Rng,
{
    fn initialize(&mut self) -> Result<(), LifeError> {
        self.reset()
    }

    fn step(&mut self) -> Result<(), LifeError> {
        self.tick()
    }

    fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            generation: self.generation(),
            population: self.population(),
            grid: self.grid(),
        }
    }
}
