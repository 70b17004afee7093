//! Conway's Game of Life with optional spontaneous births.
//!
//! [`LifeEngine`] owns a [`Grid`](board::Grid) and advances it with [`LifeEngine::tick`].
//! Neighbor counting is pluggable through [`NeighborCounter`](neighbors::NeighborCounter),
//! with a direct and an FFT-based implementation that give identical counts.

pub use config::LifeConfig;
pub use engine::LifeEngine;
pub use error::LifeError;

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod movie;
pub mod neighbors;
pub mod pos;
pub mod rule;
pub mod world;
