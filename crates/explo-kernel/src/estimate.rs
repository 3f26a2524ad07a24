//! Volume, tonnage and contained metal.

use explo_model::{
    Classification, ClassificationThresholds, EstimationResult, MeshSpacing, MetalUnit,
    MineralizedBody, ScenarioEstimate,
};

use crate::classify::classify_mesh;

/// Box volume `strike_length × thickness × depth_extent` (m³).
///
/// Orientation is ignored; this is not the volume of the oriented display
/// solid.
pub fn volume(body: &MineralizedBody) -> f64 {
    body.strike_length * body.thickness * body.depth_extent
}

/// Contained metal in `tonnage` of ore at `grade`, in the grade unit's metal unit.
pub fn contained_metal(tonnage: f64, body: &MineralizedBody) -> f64 {
    tonnage * body.grade / body.grade_unit.divisor()
}

/// Estimate one body under a classification.
pub fn estimate(body: &MineralizedBody, classification: Classification) -> EstimationResult {
    let volume = volume(body);
    let tonnage_raw = volume * body.density;
    let tonnage_adjusted = tonnage_raw * classification.confidence_factor;
    let metal_quantity = contained_metal(tonnage_adjusted, body);

    log::debug!(
        "{}: {:.0} m3, {:.0} t raw, {:.0} t adjusted, {:.1} {}",
        body.name,
        volume,
        tonnage_raw,
        tonnage_adjusted,
        metal_quantity,
        body.grade_unit.metal_unit().label()
    );

    EstimationResult {
        body_id: body.id,
        name: body.name.clone(),
        volume,
        tonnage_raw,
        tonnage_adjusted,
        grade: body.grade,
        grade_unit: body.grade_unit,
        metal_quantity,
        metal_unit: body.grade_unit.metal_unit(),
        classification: classification.class,
        confidence_factor: classification.confidence_factor,
    }
}

/// Estimate all bodies of a scenario under one shared classification
/// derived from the mesh spacing.
pub fn estimate_scenario(
    bodies: &[MineralizedBody],
    spacing: MeshSpacing,
    thresholds: &ClassificationThresholds,
) -> ScenarioEstimate {
    let classification = classify_mesh(spacing, thresholds);
    let results: Vec<EstimationResult> = bodies
        .iter()
        .map(|body| estimate(body, classification))
        .collect();

    let total_tonnage_adjusted: f64 = results.iter().map(|r| r.tonnage_adjusted).sum();
    let metal_in = |unit: MetalUnit| -> f64 {
        results
            .iter()
            .filter(|r| r.metal_unit == unit)
            .map(|r| r.metal_quantity)
            .sum()
    };
    let total_metal_ounces = metal_in(MetalUnit::Ounces);
    let total_metal_tonnes = metal_in(MetalUnit::Tonnes);

    log::info!(
        "{} bodies classified {} (factor {:.2}): {:.0} t, {:.0} oz, {:.0} t metal",
        results.len(),
        classification.class,
        classification.confidence_factor,
        total_tonnage_adjusted,
        total_metal_ounces,
        total_metal_tonnes
    );

    ScenarioEstimate {
        average_spacing: spacing.average(),
        classification: classification.class,
        confidence_factor: classification.confidence_factor,
        bodies: results,
        total_tonnage_adjusted,
        total_metal_ounces,
        total_metal_tonnes,
    }
}
