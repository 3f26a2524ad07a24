//! Plain-text tables for terminal output.

use std::fmt::Write;

use explo_kernel::{BodyGeometry, BodyHoles, Sweep, SweepParameter};
use explo_model::{
    CampaignResult, DrillParameters, PhaseTotals, Scenario, ScenarioEstimate, Session,
};

/// Saved scenarios, current one starred.
pub fn scenario_list(session: &Session) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {:<36}  {:<24}  {:<10}  {:>6}  {:<4}",
        "ID", "NAME", "CREATED", "BODIES", "PLAN"
    );
    for scenario in &session.saved {
        let marker = if scenario.id == session.current.id { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{} {:<36}  {:<24}  {:<10}  {:>6}  {:<4}",
            marker,
            scenario.id,
            scenario.name,
            scenario.creation_date,
            scenario.bodies.len(),
            if scenario.drill_plan.is_some() { "yes" } else { "-" }
        );
    }
    if session.get(session.current.id).is_none() {
        let _ = writeln!(
            out,
            "* {:<36}  {:<24}  (unsaved)",
            session.current.id, session.current.name
        );
    }
    out
}

/// Header fields and body table of one scenario.
pub fn scenario_detail(scenario: &Scenario) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Scenario: {} ({})", scenario.name, scenario.creation_date);
    for (label, value) in [
        ("Description", &scenario.description),
        ("Location", &scenario.location),
        ("Substance", &scenario.main_substance),
    ] {
        if let Some(value) = value {
            let _ = writeln!(out, "{label}: {value}");
        }
    }
    if let Some(unit) = scenario.measurement_unit {
        let _ = writeln!(out, "Measurement unit: {}", unit.label());
    }
    if scenario.bodies.is_empty() {
        let _ = writeln!(out, "No bodies.");
        return out;
    }
    let _ = writeln!(
        out,
        "{:<16} {:>9} {:>7} {:>9} {:>12} {:>7} {:>7} {:>5} {:>7}",
        "BODY", "STRIKE m", "THICK m", "DEPTH m", "GRADE", "DENSITY", "AZ", "DIP", "ROOF m"
    );
    for b in &scenario.bodies {
        let _ = writeln!(
            out,
            "{:<16} {:>9.1} {:>7.2} {:>9.1} {:>8.2} {:<3} {:>7.2} {:>7.1} {:>5.1} {:>7.1}",
            b.name,
            b.strike_length,
            b.thickness,
            b.depth_extent,
            b.grade,
            b.grade_unit.label(),
            b.density,
            b.azimuth,
            b.dip,
            b.roof_elevation
        );
    }
    out
}

/// Per-body estimate table with totals.
pub fn estimate(estimate: &ScenarioEstimate) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Mesh {:.1} m average: {} (confidence factor {:.2})",
        estimate.average_spacing, estimate.classification, estimate.confidence_factor
    );
    let _ = writeln!(
        out,
        "{:<16} {:>12} {:>12} {:>12} {:>14}",
        "BODY", "VOLUME m3", "RAW t", "ADJUSTED t", "METAL"
    );
    for r in &estimate.bodies {
        let _ = writeln!(
            out,
            "{:<16} {:>12.0} {:>12.0} {:>12.0} {:>11.1} {:<2}",
            r.name,
            r.volume,
            r.tonnage_raw,
            r.tonnage_adjusted,
            r.metal_quantity,
            r.metal_unit.label()
        );
    }
    let _ = writeln!(
        out,
        "{:<16} {:>12} {:>12} {:>12.0}",
        "TOTAL", "", "", estimate.total_tonnage_adjusted
    );
    if estimate.total_metal_ounces > 0.0 {
        let _ = writeln!(out, "Contained metal: {:.1} oz", estimate.total_metal_ounces);
    }
    if estimate.total_metal_tonnes > 0.0 {
        let _ = writeln!(out, "Contained metal: {:.1} t", estimate.total_metal_tonnes);
    }
    out
}

fn phase_line(out: &mut String, label: &str, phase: &PhaseTotals) {
    let _ = writeln!(
        out,
        "{:<12} {:>6} {:>10.0} {:>8} {:>14.0} {:>12.0} {:>14.0}",
        label,
        phase.holes,
        phase.metres,
        phase.samples,
        phase.drilling_cost,
        phase.assay_cost,
        phase.cost()
    );
}

/// Campaign summary: per-body holes, phase totals, cost and calendar.
pub fn campaign(campaign: &CampaignResult, params: &DrillParameters) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} holes, azimuth {:.0}, dip {:.0}, {:.0} m deep",
        params.drill_type.label(),
        params.orientation.azimuth,
        params.orientation.dip,
        params.max_hole_depth
    );
    let _ = writeln!(
        out,
        "Grids: initial {}x{} m, detailed {}x{} m",
        params.initial_spacing.x,
        params.initial_spacing.y,
        params.detailed_spacing.x,
        params.detailed_spacing.y
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<16} {:>9} {:>9} {:>10} {:>10}",
        "BODY", "INITIAL", "DETAILED", "INIT m", "DET m"
    );
    for b in &campaign.bodies {
        let _ = writeln!(
            out,
            "{:<16} {:>9} {:>9} {:>10.0} {:>10.0}",
            b.name, b.initial.holes, b.detailed.holes, b.initial.metres, b.detailed.metres
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<12} {:>6} {:>10} {:>8} {:>14} {:>12} {:>14}",
        "PHASE", "HOLES", "METRES", "SAMPLES", "DRILLING", "ASSAYS", "COST"
    );
    phase_line(&mut out, "Initial", &campaign.initial);
    phase_line(&mut out, "Detailed", &campaign.detailed);
    let _ = writeln!(out, "Mobilization: {:.0}", campaign.mobilization_cost);
    let _ = writeln!(out, "Total cost: {:.0}", campaign.total_cost);
    let _ = writeln!(
        out,
        "Total: {} holes, {:.0} m, {:.2} holes/ha",
        campaign.total_holes, campaign.total_metres, campaign.drilling_density
    );
    let _ = writeln!(out);

    let s = &campaign.schedule;
    for (label, stage) in [
        ("Mobilization", &s.mobilization),
        ("Phase 1", &s.phase1),
        ("Phase 2", &s.phase2),
    ] {
        let _ = writeln!(
            out,
            "{:<12} {:>4} days  {} -> {}",
            label, stage.days, stage.start, stage.end
        );
    }
    let _ = writeln!(out, "Total duration: {} days", s.total_days);
    out
}

/// Sweep as an input/output column pair.
pub fn sweep(sweep: &Sweep, input_unit: &str, output_unit: &str) -> String {
    let mut out = String::new();
    let parameter = match sweep.parameter {
        SweepParameter::Grade => "grade",
        SweepParameter::Thickness => "thickness",
    };
    let _ = writeln!(out, "Sensitivity of {} to {}", sweep.name, parameter);
    let _ = writeln!(
        out,
        "{:>12} {:>16}",
        format!("{parameter} {input_unit}"),
        output_unit
    );
    for p in &sweep.points {
        let _ = writeln!(out, "{:>12.3} {:>16.1}", p.input, p.output);
    }
    out
}

/// Centre, axes and corner count of each body, plus hole counts when traced.
pub fn geometry(bodies: &[BodyGeometry], holes: &[BodyHoles]) -> String {
    let mut out = String::new();
    for g in bodies {
        let c = g.frame.center;
        let _ = writeln!(out, "{}: centre ({:.1}, {:.1}, {:.1})", g.name, c.x, c.y, c.z);
        for (label, axis) in [
            ("strike", g.frame.strike_axis),
            ("dip", g.frame.dip_axis),
            ("thickness", g.frame.thickness_axis),
        ] {
            let _ = writeln!(
                out,
                "  {:<9} ({:>7.3}, {:>7.3}, {:>7.3})",
                label, axis.x, axis.y, axis.z
            );
        }
        let _ = writeln!(
            out,
            "  solid: {} corners, {} triangles",
            g.solid.vertices.len(),
            g.solid.faces.len()
        );
        if let Some(h) = holes.iter().find(|h| h.name == g.name) {
            let _ = writeln!(
                out,
                "  holes: {} initial, {} detailed",
                h.initial.len(),
                h.detailed.len()
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use explo_model::{
        ClassificationThresholds, CostParameters, DrillOrientation, DrillType, GradeUnit,
        MeshSpacing, MineralizedBody, ScheduleParameters, Uuid,
    };
    use time::macros::date;

    fn body(name: &str) -> MineralizedBody {
        MineralizedBody {
            id: Uuid::new_v4(),
            name: name.into(),
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

    fn params() -> DrillParameters {
        DrillParameters {
            drill_type: DrillType::ReverseCirculation,
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
                start_date: date!(2025 - 03 - 01),
            },
        }
    }

    #[test]
    fn test_scenario_list_marks_current() {
        let mut session = Session::new();
        session.new_scenario("Base case");
        let text = scenario_list(&session);
        let line = text.lines().nth(1).unwrap();
        assert!(line.starts_with('*'));
        assert!(line.contains("Base case"));
        assert!(!text.contains("(unsaved)"));
    }

    #[test]
    fn test_unsaved_current_is_listed() {
        let text = scenario_list(&Session::new());
        assert!(text.contains("(unsaved)"));
    }

    #[test]
    fn test_estimate_table() {
        let thresholds = ClassificationThresholds {
            measured_max_spacing: 50.0,
            indicated_max_spacing: 100.0,
            measured_factor: 0.95,
            indicated_factor: 0.8,
            inferred_factor: 0.6,
        };
        let result =
            explo_kernel::estimate_scenario(&[body("Vein-1")], MeshSpacing::square(75.0), &thresholds);
        let text = estimate(&result);
        assert!(text.contains("Indicated"));
        assert!(text.contains("216000"));
        assert!(text.contains("oz"));
    }

    #[test]
    fn test_campaign_report() {
        let params = params();
        let result = explo_kernel::plan(&[body("Vein-1")], &params);
        let text = campaign(&result, &params);
        assert!(text.contains("Reverse circulation (RC)"));
        assert!(text.contains("Total cost:"));
        assert!(text.contains("2025-03-16"));
        assert!(text.contains("Total duration:"));
    }

    #[test]
    fn test_scenario_detail_lists_bodies() {
        let mut scenario = Scenario::new("S", date!(2025 - 01 - 01));
        scenario.location = Some("Abitibi".into());
        scenario.measurement_unit = Some(GradeUnit::Percent);
        scenario.bodies.push(body("Vein-1"));
        let text = scenario_detail(&scenario);
        assert!(text.contains("Location: Abitibi"));
        assert!(text.contains("Measurement unit: %"));
        assert!(text.contains("Vein-1"));
        assert!(text.contains("g/t"));
    }
}
