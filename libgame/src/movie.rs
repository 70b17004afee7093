use crate::{board::Grid, error::LifeError, world::World};

/// Skips `skip` generations, then captures `frames` consecutive grids.
///
/// The world is stepped once after every captured frame, so it ends up at generation
/// `skip + frames` with the first frame showing generation `skip`.
pub fn record_movie<W>(world: &mut W, skip: usize, frames: usize) -> Result<Vec<Grid>, LifeError>
where
    W: World,
{
    for _ in 0..skip {
        world.step()?;
    }

    // `frames` comes from user input, so let the Vec grow instead of reserving it up front.
    let mut photos = Vec::new();
    for _ in 0..frames {
        photos.push(world.snapshot().grid.clone());
        world.step()?;
    }

    Ok(photos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LifeConfig, LifeEngine, world::Snapshot};

    /// Wraps an engine and refuses to step past a fixed generation.
    struct Bounded {
        engine: LifeEngine,
        last_generation: u64,
    }

    impl World for Bounded {
        fn initialize(&mut self) -> Result<(), LifeError> {
            self.engine.reset()
        }

        fn step(&mut self) -> Result<(), LifeError> {
            if self.engine.generation() >= self.last_generation {
                return Err(LifeError::InvalidDimensions { rows: 0, cols: 0 });
            }
            self.engine.tick()
        }

        fn snapshot(&self) -> Snapshot<'_> {
            Snapshot {
                generation: self.engine.generation(),
                population: self.engine.population(),
                grid: self.engine.grid(),
            }
        }
    }

    #[test]
    fn huge_frame_counts_do_not_reserve_up_front() {
        let engine = LifeEngine::new(&LifeConfig::new(4, 4).with_seed(3)).unwrap();
        let mut world = Bounded {
            engine,
            last_generation: 5,
        };

        let result = record_movie(&mut world, 2, usize::MAX);

        assert!(result.is_err());
        assert_eq!(world.engine.generation(), 5);
    }

    #[test]
    fn zero_frames_only_skips() {
        let mut engine = LifeEngine::new(&LifeConfig::new(4, 4).with_seed(3)).unwrap();

        let frames = record_movie(&mut engine, 3, 0).unwrap();

        assert!(frames.is_empty());
        assert_eq!(engine.generation(), 3);
    }
}
