//! Spacing-based resource classification.

use explo_model::{Classification, ClassificationThresholds, MeshSpacing, ResourceClass};

/// Classify an average drill spacing.
///
/// Spacing strictly below the measured limit is Measured; from the
/// measured limit up to and including the indicated limit is Indicated;
/// anything wider is Inferred. A spacing exactly at the measured limit is
/// therefore Indicated.
pub fn classify(average_spacing: f64, thresholds: &ClassificationThresholds) -> Classification {
    let class = if average_spacing < thresholds.measured_max_spacing {
        ResourceClass::Measured
    } else if average_spacing <= thresholds.indicated_max_spacing {
        ResourceClass::Indicated
    } else {
        ResourceClass::Inferred
    };

    Classification {
        class,
        confidence_factor: thresholds.factor_for(class),
    }
}

/// Classify a mesh by the mean of its two spacings.
pub fn classify_mesh(spacing: MeshSpacing, thresholds: &ClassificationThresholds) -> Classification {
    classify(spacing.average(), thresholds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::thresholds;

    #[test]
    fn test_measured() {
        let c = classify(49.9, &thresholds());
        assert_eq!(c.class, ResourceClass::Measured);
        assert_eq!(c.confidence_factor, 0.95);
    }

    #[test]
    fn test_measured_boundary_is_indicated() {
        let c = classify_mesh(MeshSpacing::square(50.0), &thresholds());
        assert_eq!(c.class, ResourceClass::Indicated);
        assert_eq!(c.confidence_factor, 0.8);
    }

    #[test]
    fn test_indicated_boundary_is_inclusive() {
        assert_eq!(classify(100.0, &thresholds()).class, ResourceClass::Indicated);
        assert_eq!(classify(100.0001, &thresholds()).class, ResourceClass::Inferred);
    }

    #[test]
    fn test_inferred() {
        let c = classify_mesh(MeshSpacing::new(100.0, 200.0), &thresholds());
        assert_eq!(c.class, ResourceClass::Inferred);
        assert_eq!(c.confidence_factor, 0.6);
    }

    #[test]
    fn test_partition_is_total_and_monotone() {
        let t = thresholds();
        let rank = |c: ResourceClass| match c {
            ResourceClass::Measured => 0,
            ResourceClass::Indicated => 1,
            ResourceClass::Inferred => 2,
        };
        let mut previous = 0;
        for step in 0..=400 {
            let spacing = step as f64 * 0.5;
            let c = classify(spacing, &t);
            assert_eq!(c.confidence_factor, t.factor_for(c.class));
            let r = rank(c.class);
            assert!(r >= previous, "class regressed at spacing {spacing}");
            previous = r;
        }
        assert_eq!(previous, 2);
    }

    #[test]
    fn test_mean_of_spacings() {
        // 30 and 60 average to 45, under the measured limit
        let c = classify_mesh(MeshSpacing::new(30.0, 60.0), &thresholds());
        assert_eq!(c.class, ResourceClass::Measured);
    }
}
