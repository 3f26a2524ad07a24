//! Drill-spacing classification records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ModelError, Result};

/// Spacing between adjacent planned holes (m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshSpacing {
    /// Spacing along strike.
    pub x: f64,
    /// Spacing along dip.
    pub y: f64,
}

impl MeshSpacing {
    /// Create a new spacing.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Square mesh.
    pub fn square(spacing: f64) -> Self {
        Self::new(spacing, spacing)
    }

    /// Mean of the two spacings, which drives classification.
    pub fn average(&self) -> f64 {
        (self.x + self.y) / 2.0
    }

    /// Both spacings must be strictly positive.
    pub fn validate(&self, what: &str) -> std::result::Result<(), String> {
        if !(self.x.is_finite() && self.x > 0.0 && self.y.is_finite() && self.y > 0.0) {
            return Err(format!(
                "{what} spacing must be positive, got {}x{}",
                self.x, self.y
            ));
        }
        Ok(())
    }
}

/// Confidence class of an estimate, from tightest to loosest drilling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceClass {
    /// Tight drilling.
    Measured,
    /// Intermediate drilling.
    Indicated,
    /// Wide drilling.
    Inferred,
}

impl ResourceClass {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            ResourceClass::Measured => "Measured",
            ResourceClass::Indicated => "Indicated",
            ResourceClass::Inferred => "Inferred",
        }
    }
}

impl fmt::Display for ResourceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A class together with the tonnage factor applied for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Confidence class.
    pub class: ResourceClass,
    /// Multiplier applied to raw tonnage, in `(0, 1]`.
    pub confidence_factor: f64,
}

/// User-tunable spacing limits and per-class confidence factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationThresholds {
    /// Average spacing strictly below this is Measured (m).
    pub measured_max_spacing: f64,
    /// Average spacing up to and including this is Indicated (m).
    pub indicated_max_spacing: f64,
    /// Factor for Measured.
    pub measured_factor: f64,
    /// Factor for Indicated.
    pub indicated_factor: f64,
    /// Factor for Inferred.
    pub inferred_factor: f64,
}

impl ClassificationThresholds {
    /// Factor for a given class.
    pub fn factor_for(&self, class: ResourceClass) -> f64 {
        match class {
            ResourceClass::Measured => self.measured_factor,
            ResourceClass::Indicated => self.indicated_factor,
            ResourceClass::Inferred => self.inferred_factor,
        }
    }

    /// Validate thresholds.
    pub fn validate(&self) -> Result<()> {
        let positive = |limit: f64| limit.is_finite() && limit > 0.0;
        if !positive(self.measured_max_spacing) || !positive(self.indicated_max_spacing) {
            return Err(ModelError::InvalidThresholds(
                "spacing limits must be positive and finite".into(),
            ));
        }
        if self.measured_max_spacing > self.indicated_max_spacing {
            return Err(ModelError::InvalidThresholds(format!(
                "measured limit {} exceeds indicated limit {}",
                self.measured_max_spacing, self.indicated_max_spacing
            )));
        }
        for (name, factor) in [
            ("measured", self.measured_factor),
            ("indicated", self.indicated_factor),
            ("inferred", self.inferred_factor),
        ] {
            if !(factor > 0.0 && factor <= 1.0) {
                return Err(ModelError::InvalidThresholds(format!(
                    "{name} factor must be in (0, 1], got {factor}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> ClassificationThresholds {
        ClassificationThresholds {
            measured_max_spacing: 50.0,
            indicated_max_spacing: 100.0,
            measured_factor: 0.95,
            indicated_factor: 0.8,
            inferred_factor: 0.6,
        }
    }

    #[test]
    fn test_average_spacing() {
        assert!((MeshSpacing::new(40.0, 60.0).average() - 50.0).abs() < 1e-12);
        assert!((MeshSpacing::square(25.0).average() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_spacing_validation() {
        assert!(MeshSpacing::new(10.0, 0.0).validate("initial").is_err());
        assert!(MeshSpacing::new(10.0, 10.0).validate("initial").is_ok());
    }

    #[test]
    fn test_thresholds_validate() {
        assert!(thresholds().validate().is_ok());

        let inverted = ClassificationThresholds {
            measured_max_spacing: 150.0,
            ..thresholds()
        };
        assert!(inverted.validate().is_err());

        let bad_factor = ClassificationThresholds {
            inferred_factor: 1.2,
            ..thresholds()
        };
        assert!(bad_factor.validate().is_err());
    }

    #[test]
    fn test_thresholds_reject_non_finite() {
        for limit in [f64::NAN, f64::INFINITY] {
            let indicated = ClassificationThresholds {
                indicated_max_spacing: limit,
                ..thresholds()
            };
            assert!(indicated.validate().is_err());

            let both = ClassificationThresholds {
                measured_max_spacing: limit,
                indicated_max_spacing: limit,
                ..thresholds()
            };
            assert!(both.validate().is_err());
        }

        let nan_factor = ClassificationThresholds {
            measured_factor: f64::NAN,
            ..thresholds()
        };
        assert!(nan_factor.validate().is_err());
    }

    #[test]
    fn test_factor_for() {
        let t = thresholds();
        assert_eq!(t.factor_for(ResourceClass::Measured), 0.95);
        assert_eq!(t.factor_for(ResourceClass::Indicated), 0.8);
        assert_eq!(t.factor_for(ResourceClass::Inferred), 0.6);
    }

    #[test]
    fn test_class_display() {
        assert_eq!(ResourceClass::Indicated.to_string(), "Indicated");
    }
}
