//! Orchestration services for the API layer.

pub mod live;

pub use live::LatestWins;
