pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::adapters::memory_store::InMemoryCubeStore;
pub use crate::config::{EngineSettings, SceneConfig};
pub use crate::core::collision::{collides, intersection_volume, CollisionTest};
pub use crate::core::engine::CubeEngine;
pub use crate::domain::model::{Axis, Collision, Cuboid, Intersection, OverlapRule, Point3, Span};
pub use crate::domain::ports::{ConfigProvider, CubeStore};
pub use crate::utils::error::{CubeError, Result};
