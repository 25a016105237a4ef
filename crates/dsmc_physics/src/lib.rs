pub mod boundary;
pub mod collision;
pub mod ensemble;
pub mod grid;
pub mod sampling;
pub mod streams;

pub use collision::{CollisionStrategy, IsotropicScatter, NaiveSwap};
pub use grid::SpatialGrid;
pub use sampling::{MacroSample, sample_macroscopic};
pub use streams::StepStreams;
