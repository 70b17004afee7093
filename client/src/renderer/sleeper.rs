use std::time::{Duration, Instant};

/// Paces frames so that consecutive calls to [`Sleeper::sleep`] are at least
/// `target_delta_time` apart.
pub struct Sleeper {
    pub target_delta_time: Duration,
    pub last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    /// Returns whether it actually had to sleep.
    pub fn sleep(&mut self) -> bool {
        let slept = match self.last_instant {
            Some(last_instant) => {
                let delta_time = last_instant.elapsed();

                if self.target_delta_time > delta_time {
                    spin_sleep::sleep(self.target_delta_time - delta_time);
                    true
                } else {
                    false
                }
            }
            // Nothing to pace against on the first frame.
            None => false,
        };

        self.last_instant = Some(Instant::now());
        slept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_never_sleeps() {
        let mut sleeper = Sleeper::new(Duration::from_millis(50));
        assert!(!sleeper.sleep());
        assert!(sleeper.last_instant.is_some());
    }

    #[test]
    fn waits_out_the_remaining_frame_time() {
        let mut sleeper = Sleeper::new(Duration::from_millis(20));
        sleeper.sleep();

        let before = Instant::now();
        assert!(sleeper.sleep());
        assert!(before.elapsed() >= Duration::from_millis(10));
    }
}
