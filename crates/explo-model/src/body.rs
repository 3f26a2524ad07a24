//! Vein body records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ModelError, Result};

/// Grams per troy ounce.
pub const GRAMS_PER_TROY_OUNCE: f64 = 31.1035;

/// How a body's grade is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeUnit {
    /// Mass of metal per tonne of ore (g/t), precious metals.
    MassPerTonne,
    /// Weight percent, base metals.
    Percent,
}

impl GradeUnit {
    /// Divisor turning `tonnes × grade` into the metal unit.
    pub fn divisor(self) -> f64 {
        match self {
            GradeUnit::MassPerTonne => GRAMS_PER_TROY_OUNCE,
            GradeUnit::Percent => 100.0,
        }
    }

    /// Unit of the contained metal quantity.
    pub fn metal_unit(self) -> MetalUnit {
        match self {
            GradeUnit::MassPerTonne => MetalUnit::Ounces,
            GradeUnit::Percent => MetalUnit::Tonnes,
        }
    }

    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            GradeUnit::MassPerTonne => "g/t",
            GradeUnit::Percent => "%",
        }
    }

    /// Parse a display label such as `"g/t (gold, silver)"` or `"% (base metals)"`.
    pub fn from_label(label: &str) -> Result<Self> {
        if label.contains("g/t") {
            Ok(GradeUnit::MassPerTonne)
        } else if label.contains('%') {
            Ok(GradeUnit::Percent)
        } else {
            Err(ModelError::UnknownGradeUnit(label.to_string()))
        }
    }
}

/// Unit of a contained metal quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetalUnit {
    /// Troy ounces.
    Ounces,
    /// Metric tonnes.
    Tonnes,
}

impl MetalUnit {
    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            MetalUnit::Ounces => "oz",
            MetalUnit::Tonnes => "t",
        }
    }
}

/// A tabular vein modelled as an oriented rectangular box.
///
/// Every body is centred on the shared horizontal origin; only its roof
/// elevation places it in space. Bodies of one scenario are therefore not
/// laterally related to one another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MineralizedBody {
    /// Unique, immutable identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Largest extent within the vein plane, along strike (m).
    pub strike_length: f64,
    /// Extent perpendicular to the vein plane (m).
    pub thickness: f64,
    /// Extent along dip (m).
    pub depth_extent: f64,
    /// Average grade, in `grade_unit`.
    pub grade: f64,
    /// Unit of `grade`.
    pub grade_unit: GradeUnit,
    /// Bulk density (t/m³).
    pub density: f64,
    /// Strike bearing in degrees clockwise from north, `[0, 360)`.
    pub azimuth: f64,
    /// Dip below horizontal in degrees, `[0, 90]`.
    pub dip: f64,
    /// Elevation of the top of the body relative to surface (m, ≤ 0).
    pub roof_elevation: f64,
}

impl MineralizedBody {
    /// Check every field against its documented domain.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("strike_length", self.strike_length),
            ("thickness", self.thickness),
            ("depth_extent", self.depth_extent),
            ("grade", self.grade),
            ("density", self.density),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(self.invalid(field, format!("must be positive, got {value}")));
            }
        }
        if !(0.0..360.0).contains(&self.azimuth) {
            return Err(self.invalid(
                "azimuth",
                format!("must be in [0, 360), got {}", self.azimuth),
            ));
        }
        if !(0.0..=90.0).contains(&self.dip) {
            return Err(self.invalid("dip", format!("must be in [0, 90], got {}", self.dip)));
        }
        if !self.roof_elevation.is_finite() || self.roof_elevation > 0.0 {
            return Err(self.invalid(
                "roof_elevation",
                format!("must be at or below surface, got {}", self.roof_elevation),
            ));
        }
        Ok(())
    }

    /// Copy of this body under a fresh id, for duplicating into another scenario.
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            ..self.clone()
        }
    }

    fn invalid(&self, field: &'static str, reason: String) -> ModelError {
        ModelError::InvalidBody {
            name: self.name.clone(),
            field,
            reason,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_body(name: &str) -> MineralizedBody {
    MineralizedBody {
        id: Uuid::new_v4(),
        name: name.to_string(),
        strike_length: 100.0,
        thickness: 5.0,
        depth_extent: 200.0,
        grade: 1.5,
        grade_unit: GradeUnit::MassPerTonne,
        density: 2.7,
        azimuth: 90.0,
        dip: 60.0,
        roof_elevation: -50.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_body() {
        assert!(sample_body("Vein-1").validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_thickness() {
        let body = MineralizedBody {
            thickness: 0.0,
            ..sample_body("thin")
        };
        match body.validate() {
            Err(ModelError::InvalidBody { field, .. }) => assert_eq!(field, "thickness"),
            other => panic!("expected InvalidBody, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_steep_dip() {
        let body = MineralizedBody {
            dip: 91.0,
            ..sample_body("steep")
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_rejects_full_circle_azimuth() {
        let body = MineralizedBody {
            azimuth: 360.0,
            ..sample_body("north")
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_rejects_roof_above_surface() {
        let body = MineralizedBody {
            roof_elevation: 10.0,
            ..sample_body("outcrop")
        };
        assert!(body.validate().is_err());
        let at_surface = MineralizedBody {
            roof_elevation: 0.0,
            ..sample_body("outcrop")
        };
        assert!(at_surface.validate().is_ok());
    }

    #[test]
    fn test_grade_unit_labels() {
        assert_eq!(
            GradeUnit::from_label("g/t (or, argent)").unwrap(),
            GradeUnit::MassPerTonne
        );
        assert_eq!(
            GradeUnit::from_label("% (métaux de base)").unwrap(),
            GradeUnit::Percent
        );
        assert!(GradeUnit::from_label("ppm").is_err());
    }

    #[test]
    fn test_grade_unit_conversion() {
        assert_eq!(GradeUnit::MassPerTonne.metal_unit(), MetalUnit::Ounces);
        assert_eq!(GradeUnit::Percent.metal_unit(), MetalUnit::Tonnes);
        assert!((GradeUnit::MassPerTonne.divisor() - 31.1035).abs() < 1e-12);
        assert!((GradeUnit::Percent.divisor() - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_duplicate_gets_new_id() {
        let body = sample_body("Vein-1");
        let copy = body.duplicate();
        assert_ne!(body.id, copy.id);
        assert_eq!(body.name, copy.name);
        assert_eq!(body.thickness, copy.thickness);
    }
}
