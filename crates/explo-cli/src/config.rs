//! `explo.toml` configuration.
//!
//! Every key is optional. Missing keys and a missing file both fall back
//! to the defaults below, which are the only place default parameters live.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use explo_model::{
    ClassificationThresholds, CostParameters, Date, DrillOrientation, DrillParameters, DrillType,
    MeshSpacing, ScheduleParameters,
};
use serde::{Deserialize, Serialize};

/// Whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub classification: ClassificationConfig,
    pub mesh: MeshConfig,
    pub drilling: DrillingConfig,
    pub costs: CostsConfig,
    pub schedule: ScheduleConfig,
    pub sensitivity: SensitivityConfig,
}

/// `[classification]`: spacing limits and confidence factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    pub measured_max_spacing: f64,
    pub indicated_max_spacing: f64,
    pub measured_factor: f64,
    pub indicated_factor: f64,
    pub inferred_factor: f64,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            measured_max_spacing: 50.0,
            indicated_max_spacing: 100.0,
            measured_factor: 0.95,
            indicated_factor: 0.80,
            inferred_factor: 0.60,
        }
    }
}

/// `[mesh]`: estimation mesh and display extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    pub spacing_x: f64,
    pub spacing_y: f64,
    /// Half width of the surface reference grid (m).
    pub surface_half_extent: f64,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            spacing_x: 100.0,
            spacing_y: 100.0,
            surface_half_extent: 200.0,
        }
    }
}

/// Drilling method as written in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum DrillMethod {
    /// Diamond core
    Ddh,
    /// Reverse circulation
    Rc,
}

impl From<DrillMethod> for DrillType {
    fn from(method: DrillMethod) -> Self {
        match method {
            DrillMethod::Ddh => DrillType::DiamondCore,
            DrillMethod::Rc => DrillType::ReverseCirculation,
        }
    }
}

/// `[drilling]`: grids, hole direction and depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillingConfig {
    pub drill_type: DrillMethod,
    pub initial_spacing_x: f64,
    pub initial_spacing_y: f64,
    pub detailed_spacing_x: f64,
    pub detailed_spacing_y: f64,
    pub azimuth: f64,
    pub dip: f64,
    pub max_hole_depth: f64,
}

impl Default for DrillingConfig {
    fn default() -> Self {
        Self {
            drill_type: DrillMethod::Ddh,
            initial_spacing_x: 100.0,
            initial_spacing_y: 100.0,
            detailed_spacing_x: 50.0,
            detailed_spacing_y: 50.0,
            azimuth: 270.0,
            dip: 60.0,
            max_hole_depth: 300.0,
        }
    }
}

/// `[costs]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostsConfig {
    pub cost_per_metre: f64,
    pub mobilization_cost: f64,
    pub cost_per_sample: f64,
    pub sample_length: f64,
}

impl Default for CostsConfig {
    fn default() -> Self {
        Self {
            cost_per_metre: 150.0,
            mobilization_cost: 50_000.0,
            cost_per_sample: 30.0,
            sample_length: 1.0,
        }
    }
}

/// `[schedule]`. A missing `start_date` means today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub metres_per_day: f64,
    pub mobilization_days: u32,
    /// `"YYYY-MM-DD"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            metres_per_day: 100.0,
            mobilization_days: 15,
            start_date: None,
        }
    }
}

/// `[sensitivity]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensitivityConfig {
    pub steps: usize,
    pub low_fraction: f64,
    pub high_fraction: f64,
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            steps: 10,
            low_fraction: 0.5,
            high_fraction: 1.5,
        }
    }
}

impl Config {
    /// Read a config file, or defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Classification limits, validated.
    pub fn thresholds(&self) -> Result<ClassificationThresholds> {
        let c = &self.classification;
        let thresholds = ClassificationThresholds {
            measured_max_spacing: c.measured_max_spacing,
            indicated_max_spacing: c.indicated_max_spacing,
            measured_factor: c.measured_factor,
            indicated_factor: c.indicated_factor,
            inferred_factor: c.inferred_factor,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Estimation mesh, validated.
    pub fn mesh_spacing(&self) -> Result<MeshSpacing> {
        let spacing = MeshSpacing::new(self.mesh.spacing_x, self.mesh.spacing_y);
        spacing
            .validate("estimation")
            .map_err(anyhow::Error::msg)?;
        Ok(spacing)
    }

    /// Full campaign parameters, validated. `today` stands in for a missing start date.
    pub fn drill_parameters(&self, today: Date) -> Result<DrillParameters> {
        let d = &self.drilling;
        let params = DrillParameters {
            drill_type: d.drill_type.into(),
            initial_spacing: MeshSpacing::new(d.initial_spacing_x, d.initial_spacing_y),
            detailed_spacing: MeshSpacing::new(d.detailed_spacing_x, d.detailed_spacing_y),
            orientation: DrillOrientation {
                azimuth: d.azimuth,
                dip: d.dip,
            },
            max_hole_depth: d.max_hole_depth,
            costs: CostParameters {
                cost_per_metre: self.costs.cost_per_metre,
                mobilization_cost: self.costs.mobilization_cost,
                cost_per_sample: self.costs.cost_per_sample,
                sample_length: self.costs.sample_length,
            },
            schedule: ScheduleParameters {
                metres_per_day: self.schedule.metres_per_day,
                mobilization_days: self.schedule.mobilization_days,
                start_date: self.schedule.start_date.unwrap_or(today),
            },
        };
        params.validate()?;
        Ok(params)
    }
}
