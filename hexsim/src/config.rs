//! Configuration for the hex sandbox.
//!
//! Loaded from a YAML file; every section falls back to its defaults when
//! omitted.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Lattice dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Hexagon radius in points
    pub cell_size: f32,
    /// Edge length of the start-pattern thumbnail in points
    pub thumbnail_size: f32,
    /// Width of the stats side panel
    pub panel_width: f32,
    pub live_color: [u8; 3],
    pub dead_color: [u8; 3],
}

/// Stepping behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Minimum wall-clock time between generations
    pub update_interval_ms: u64,
    /// How many recent generations are remembered for cycle detection
    pub cycle_window: usize,
    /// Pause automatically once a generation repeats
    pub stop_on_cycle: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { rows: 120, cols: 200 }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_size: 4.0,
            thumbnail_size: 50.0,
            panel_width: 200.0,
            live_color: [0, 0, 0],
            dead_color: [255, 255, 255],
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: 100,
            cycle_window: 10,
            stop_on_cycle: true,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must have at least one row and column, got {}x{}",
                self.grid.rows, self.grid.cols
            )));
        }
        if !self.display.cell_size.is_finite() || self.display.cell_size <= 0.0 {
            return Err(ConfigError::Invalid("display.cell_size must be positive".into()));
        }
        if !self.display.thumbnail_size.is_finite() || self.display.thumbnail_size <= 0.0 {
            return Err(ConfigError::Invalid("display.thumbnail_size must be positive".into()));
        }
        if !self.display.panel_width.is_finite() || self.display.panel_width <= 0.0 {
            return Err(ConfigError::Invalid("display.panel_width must be positive".into()));
        }
        if self.simulation.update_interval_ms == 0 {
            return Err(ConfigError::Invalid("simulation.update_interval_ms must be non-zero".into()));
        }
        if self.simulation.cycle_window == 0 {
            return Err(ConfigError::Invalid("simulation.cycle_window must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn yaml_roundtrip() {
        let mut config = Config::default();
        config.grid.rows = 33;
        config.display.live_color = [10, 20, 30];
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = Config::from_yaml("grid:\n  rows: 8\n  cols: 9\n").unwrap();
        assert_eq!(config.grid, GridConfig { rows: 8, cols: 9 });
        assert_eq!(config.display, DisplayConfig::default());

        let config = Config::from_yaml("simulation:\n  cycle_window: 3\n").unwrap();
        assert_eq!(config.simulation.cycle_window, 3);
        assert_eq!(config.simulation.update_interval_ms, 100);
    }

    #[test]
    fn zero_rows_are_rejected() {
        let err = Config::from_yaml("grid:\n  rows: 0\n  cols: 9\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn bad_panel_width_is_rejected() {
        for width in [-10.0, 0.0, f32::NAN, f32::INFINITY] {
            let mut config = Config::default();
            config.display.panel_width = width;
            assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))), "width {width}");
        }
        let err = Config::from_yaml("display:\n  panel_width: -5.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_yaml_is_reported() {
        let err = Config::from_yaml("grid: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn save_and_load_file() {
        let path = std::env::temp_dir().join(format!("hexsim_config_{}.yaml", std::process::id()));
        let config = Config::default();
        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::load("/nonexistent/hexsim.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
