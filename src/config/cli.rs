use crate::core::OverlapRule;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cube-intersection")]
#[command(about = "Collision and overlap-volume queries over axis-aligned cubes")]
pub struct CliConfig {
    /// TOML scene file with the cubes to load
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Per-axis overlap rule; overrides the scene's [engine] table
    #[arg(long, value_enum)]
    pub overlap_rule: Option<OverlapRule>,

    /// Worker threads for all-vs-all queries; overrides the scene's [engine] table
    #[arg(long)]
    pub workers: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every cube in the scene
    List,
    /// Show one cube
    Get { id: String },
    /// Cubes colliding with ID
    Collisions {
        id: String,
        /// Only test these ids instead of every other cube
        #[arg(long, value_delimiter = ',')]
        with: Option<Vec<String>>,
    },
    /// Cubes sharing volume with ID, with the shared volume
    Intersections {
        id: String,
        /// Only test these ids instead of every other cube
        #[arg(long, value_delimiter = ',')]
        with: Option<Vec<String>>,
    },
    /// Every colliding pair, reported once per order
    AllCollisions,
    /// Every intersecting pair, reported once per order
    AllIntersections,
}
