use crate::config::EngineSettings;
use crate::core::engine::CubeEngine;
use crate::core::{ConfigProvider, Cuboid, CubeStore, Point3};
use crate::utils::error::{CubeError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A scene file: engine settings plus the cubes to preload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub cubes: Vec<CubeConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CubeConfig {
    pub id: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub center: Point3,
}

impl CubeConfig {
    pub fn to_cuboid(&self) -> Result<Cuboid> {
        Cuboid::new(self.id.clone(), self.length, self.width, self.height, self.center)
    }
}

impl SceneConfig {
    /// Load a scene from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CubeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse a scene from TOML text, after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| CubeError::config("toml_parsing", format!("TOML parsing error: {}", e)))
    }

    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| CubeError::config("toml_parsing", e.to_string()))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Build every cube, failing on the first invalid one.
    pub fn cuboids(&self) -> Result<Vec<Cuboid>> {
        self.cubes.iter().map(CubeConfig::to_cuboid).collect()
    }

    /// Insert the scene's cubes into `engine`'s store, in file order.
    pub async fn load_into<S: CubeStore, C: ConfigProvider>(
        &self,
        engine: &CubeEngine<S, C>,
    ) -> Result<usize> {
        let cubes = self.cuboids()?;
        let count = cubes.len();
        for cube in cubes {
            engine.insert_cuboid(cube).await?;
        }
        tracing::info!("Loaded {} cubes from scene", count);
        Ok(count)
    }
}

impl SceneConfig {
    /// Checks the cubes only: every one builds and no id repeats.
    ///
    /// Callers that override `[engine]` validate the final settings themselves.
    pub fn validate_cubes(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for cube in &self.cubes {
            cube.to_cuboid()?;
            if !seen.insert(cube.id.as_str()) {
                return Err(CubeError::DuplicateIdError {
                    id: cube.id.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Validate for SceneConfig {
    fn validate(&self) -> Result<()> {
        self.engine.validate()?;
        self.validate_cubes()
    }
}
