//! Game-of-Life variant on a brick-offset hexagonal grid, rendered one
//! image per generation.

pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod render;
pub mod simulation;
pub mod sink;
pub mod topology;


pub use crate::{
    config::{Config, Palette, Reanimation},
    engine::{Automaton, Rules},
    error::{ConfigError, Error, Result},
    grid::Grid,
    simulation::Simulation,
    sink::{DirectorySink, FrameSink, MemorySink},
    topology::Topology,
};
