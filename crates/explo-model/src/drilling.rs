//! Drill campaign parameters and the plan attached to a scenario.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::classification::MeshSpacing;
use crate::error::{ModelError, Result};
use crate::results::CampaignResult;

/// Drilling method. Carried for reporting; it has no numeric effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrillType {
    /// Diamond core drilling (DDH).
    DiamondCore,
    /// Reverse circulation (RC).
    ReverseCirculation,
}

impl DrillType {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            DrillType::DiamondCore => "Diamond core (DDH)",
            DrillType::ReverseCirculation => "Reverse circulation (RC)",
        }
    }
}

/// Direction shared by every hole of the campaign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrillOrientation {
    /// Bearing in degrees clockwise from north.
    pub azimuth: f64,
    /// Inclination below horizontal in degrees.
    pub dip: f64,
}

/// Unit costs of the campaign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostParameters {
    /// Drilling cost per metre.
    pub cost_per_metre: f64,
    /// One-off mobilization cost.
    pub mobilization_cost: f64,
    /// Assay cost per sample.
    pub cost_per_sample: f64,
    /// Average sample length (m).
    pub sample_length: f64,
}

/// Productivity and calendar inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleParameters {
    /// Metres drilled per day.
    pub metres_per_day: f64,
    /// Days of mobilization and site preparation.
    pub mobilization_days: u32,
    /// First day of the project.
    pub start_date: Date,
}

/// Everything the planner needs besides the bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrillParameters {
    /// Drilling method.
    pub drill_type: DrillType,
    /// Coarse, first-pass grid.
    pub initial_spacing: MeshSpacing,
    /// Fine, infill grid.
    pub detailed_spacing: MeshSpacing,
    /// Hole direction.
    pub orientation: DrillOrientation,
    /// Length of every hole (m).
    pub max_hole_depth: f64,
    /// Unit costs.
    pub costs: CostParameters,
    /// Productivity and dates.
    pub schedule: ScheduleParameters,
}

impl DrillParameters {
    /// Validate parameters.
    pub fn validate(&self) -> Result<()> {
        self.initial_spacing
            .validate("initial")
            .and_then(|_| self.detailed_spacing.validate("detailed"))
            .map_err(ModelError::InvalidDrillParameters)?;

        if !(0.0..360.0).contains(&self.orientation.azimuth) {
            return Err(ModelError::InvalidDrillParameters(format!(
                "drill azimuth must be in [0, 360), got {}",
                self.orientation.azimuth
            )));
        }
        if !(0.0..=90.0).contains(&self.orientation.dip) {
            return Err(ModelError::InvalidDrillParameters(format!(
                "drill dip must be in [0, 90], got {}",
                self.orientation.dip
            )));
        }
        if !(self.max_hole_depth.is_finite() && self.max_hole_depth > 0.0) {
            return Err(ModelError::InvalidDrillParameters(
                "max_hole_depth must be positive and finite".into(),
            ));
        }
        let costs = &self.costs;
        for (name, cost) in [
            ("cost_per_metre", costs.cost_per_metre),
            ("mobilization_cost", costs.mobilization_cost),
            ("cost_per_sample", costs.cost_per_sample),
        ] {
            if !(cost.is_finite() && cost >= 0.0) {
                return Err(ModelError::InvalidDrillParameters(format!(
                    "{name} must be finite and not negative, got {cost}"
                )));
            }
        }
        if !(costs.sample_length.is_finite() && costs.sample_length > 0.0) {
            return Err(ModelError::InvalidDrillParameters(
                "sample_length must be positive and finite".into(),
            ));
        }
        if !(self.schedule.metres_per_day.is_finite() && self.schedule.metres_per_day > 0.0) {
            return Err(ModelError::InvalidDrillParameters(
                "metres_per_day must be positive and finite".into(),
            ));
        }
        if self.detailed_spacing.x > self.initial_spacing.x
            || self.detailed_spacing.y > self.initial_spacing.y
        {
            log::warn!(
                "detailed spacing {}x{} is coarser than initial spacing {}x{}",
                self.detailed_spacing.x,
                self.detailed_spacing.y,
                self.initial_spacing.x,
                self.initial_spacing.y
            );
        }
        Ok(())
    }
}

/// A computed campaign saved with its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillPlan {
    /// Date the plan was saved.
    pub creation_date: Date,
    /// Inputs.
    pub parameters: DrillParameters,
    /// Names of the bodies included in the campaign.
    pub drilled_bodies: Vec<String>,
    /// Outputs.
    pub campaign: CampaignResult,
}

#[cfg(test)]
pub(crate) fn sample_parameters() -> DrillParameters {
    DrillParameters {
        drill_type: DrillType::DiamondCore,
        initial_spacing: MeshSpacing::square(100.0),
        detailed_spacing: MeshSpacing::square(50.0),
        orientation: DrillOrientation {
            azimuth: 270.0,
            dip: 60.0,
        },
        max_hole_depth: 300.0,
        costs: CostParameters {
            cost_per_metre: 150.0,
            mobilization_cost: 50_000.0,
            cost_per_sample: 30.0,
            sample_length: 1.0,
        },
        schedule: ScheduleParameters {
            metres_per_day: 100.0,
            mobilization_days: 15,
            start_date: time::macros::date!(2025 - 03 - 01),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_parameters() {
        assert!(sample_parameters().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_sample_length() {
        let mut params = sample_parameters();
        params.costs.sample_length = 0.0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_productivity() {
        let mut params = sample_parameters();
        params.schedule.metres_per_day = 0.0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let cases: [fn(&mut DrillParameters); 7] = [
            |p| p.max_hole_depth = f64::NAN,
            |p| p.max_hole_depth = f64::INFINITY,
            |p| p.costs.sample_length = f64::NAN,
            |p| p.costs.cost_per_metre = f64::NAN,
            |p| p.costs.mobilization_cost = f64::INFINITY,
            |p| p.costs.cost_per_sample = f64::NAN,
            |p| p.schedule.metres_per_day = f64::INFINITY,
        ];
        for set in cases {
            let mut params = sample_parameters();
            set(&mut params);
            assert!(matches!(
                params.validate(),
                Err(ModelError::InvalidDrillParameters(_))
            ));
        }

        let mut params = sample_parameters();
        params.orientation.dip = f64::NAN;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_spacing() {
        let mut params = sample_parameters();
        params.detailed_spacing.y = 0.0;
        assert!(matches!(
            params.validate(),
            Err(ModelError::InvalidDrillParameters(_))
        ));
    }

    #[test]
    fn test_coarser_detail_grid_is_allowed() {
        let mut params = sample_parameters();
        params.detailed_spacing = MeshSpacing::square(200.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_drill_type_label() {
        assert_eq!(DrillType::ReverseCirculation.label(), "Reverse circulation (RC)");
    }
}
