//! Campaign metreage, cost and density rollup.

use explo_model::{
    CampaignResult, CostParameters, Date, DrillParameters, DrillPlan, DrillResult,
    MineralizedBody, PhaseResult, PhaseTotals,
};

use crate::grid::phase_hole_counts;
use crate::schedule::schedule;

/// Square metres per hectare.
const HECTARE: f64 = 10_000.0;

/// Metreage, samples and cost of `holes` holes of `hole_depth`.
pub fn phase_result(holes: u32, hole_depth: f64, costs: &CostParameters) -> PhaseResult {
    let metres = holes as f64 * hole_depth;
    let samples = (metres / costs.sample_length).ceil() as u64;
    PhaseResult {
        holes,
        metres,
        samples,
        cost: metres * costs.cost_per_metre + samples as f64 * costs.cost_per_sample,
    }
}

fn accumulate(totals: &mut PhaseTotals, phase: &PhaseResult, costs: &CostParameters) {
    totals.holes = totals.holes.saturating_add(phase.holes);
    totals.metres += phase.metres;
    totals.samples = totals.samples.saturating_add(phase.samples);
    totals.drilling_cost += phase.metres * costs.cost_per_metre;
    totals.assay_cost += phase.samples as f64 * costs.cost_per_sample;
}

/// Plan a two-phase campaign over every body.
///
/// Mobilization is charged once for the campaign, never per body or phase.
/// Drilling density is holes per hectare of summed strike × dip area.
pub fn plan(bodies: &[MineralizedBody], params: &DrillParameters) -> CampaignResult {
    let costs = &params.costs;
    let mut initial = PhaseTotals::default();
    let mut detailed = PhaseTotals::default();
    let mut area_ha = 0.0;

    let results: Vec<DrillResult> = bodies
        .iter()
        .map(|body| {
            let counts =
                phase_hole_counts(body, params.initial_spacing, params.detailed_spacing);
            let result = DrillResult {
                body_id: body.id,
                name: body.name.clone(),
                hole_depth: params.max_hole_depth,
                initial: phase_result(counts.initial, params.max_hole_depth, costs),
                detailed: phase_result(counts.detailed, params.max_hole_depth, costs),
            };
            log::debug!(
                "{}: {} + {} holes, {:.0} m",
                body.name,
                counts.initial,
                counts.detailed,
                result.initial.metres + result.detailed.metres
            );

            accumulate(&mut initial, &result.initial, costs);
            accumulate(&mut detailed, &result.detailed, costs);
            area_ha += body.strike_length * body.depth_extent / HECTARE;
            result
        })
        .collect();

    let total_holes = initial.holes.saturating_add(detailed.holes);
    let total_metres = initial.metres + detailed.metres;
    let total_cost = costs.mobilization_cost + initial.cost() + detailed.cost();
    let drilling_density = if area_ha > 0.0 {
        total_holes as f64 / area_ha
    } else {
        0.0
    };
    let schedule = schedule(initial.metres, detailed.metres, &params.schedule);

    log::info!(
        "campaign over {} bodies: {} holes, {:.0} m, cost {:.0}, {} days",
        results.len(),
        total_holes,
        total_metres,
        total_cost,
        schedule.total_days
    );

    CampaignResult {
        bodies: results,
        initial,
        detailed,
        mobilization_cost: costs.mobilization_cost,
        total_cost,
        total_holes,
        total_metres,
        drilling_density,
        schedule,
    }
}

/// Bodies whose names appear in `names`, in scenario order.
///
/// Names matching no body are logged and skipped.
pub fn select_bodies<S: AsRef<str>>(bodies: &[MineralizedBody], names: &[S]) -> Vec<MineralizedBody> {
    for name in names {
        let name = name.as_ref();
        if !bodies.iter().any(|b| b.name == name) {
            log::warn!("no body named {name:?}; ignored");
        }
    }
    bodies
        .iter()
        .filter(|b| names.iter().any(|n| n.as_ref() == b.name))
        .cloned()
        .collect()
}

/// Plan a campaign over the named bodies only.
pub fn plan_selected<S: AsRef<str>>(
    bodies: &[MineralizedBody],
    names: &[S],
    params: &DrillParameters,
) -> CampaignResult {
    plan(&select_bodies(bodies, names), params)
}

/// Plan the named bodies and package inputs and outputs for saving.
pub fn drill_plan<S: AsRef<str>>(
    bodies: &[MineralizedBody],
    names: &[S],
    params: &DrillParameters,
    creation_date: Date,
) -> DrillPlan {
    let selected = select_bodies(bodies, names);
    DrillPlan {
        creation_date,
        parameters: *params,
        drilled_bodies: selected.iter().map(|b| b.name.clone()).collect(),
        campaign: plan(&selected, params),
    }
}
