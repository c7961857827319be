pub mod collision;
pub mod engine;

pub use crate::domain::model::{Collision, Cuboid, Intersection, OverlapRule, Point3};
pub use crate::domain::ports::{ConfigProvider, CubeStore};
pub use crate::utils::error::Result;
