//! Flat result records produced by the kernel.
//!
//! These are derived values, never edited by hand. They are serializable so
//! that an export collaborator can write them in any structured format.

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::body::{GradeUnit, MetalUnit};
use crate::classification::ResourceClass;

/// Estimate for one body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Body id.
    pub body_id: Uuid,
    /// Body name.
    pub name: String,
    /// Box volume (m³).
    pub volume: f64,
    /// Volume × density (t).
    pub tonnage_raw: f64,
    /// Raw tonnage × confidence factor (t).
    pub tonnage_adjusted: f64,
    /// Grade used.
    pub grade: f64,
    /// Unit of `grade`.
    pub grade_unit: GradeUnit,
    /// Contained metal.
    pub metal_quantity: f64,
    /// Unit of `metal_quantity`.
    pub metal_unit: MetalUnit,
    /// Class the factor came from.
    pub classification: ResourceClass,
    /// Factor applied to raw tonnage.
    pub confidence_factor: f64,
}

/// Estimate for a whole scenario under one shared classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEstimate {
    /// Mean of the mesh spacings (m).
    pub average_spacing: f64,
    /// Shared class.
    pub classification: ResourceClass,
    /// Shared factor.
    pub confidence_factor: f64,
    /// Per-body results, in scenario order.
    pub bodies: Vec<EstimationResult>,
    /// Sum of adjusted tonnages (t).
    pub total_tonnage_adjusted: f64,
    /// Metal from g/t bodies (oz).
    pub total_metal_ounces: f64,
    /// Metal from percent bodies (t).
    pub total_metal_tonnes: f64,
}

/// One drilling phase of one body.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhaseResult {
    /// Hole count.
    pub holes: u32,
    /// Metres drilled.
    pub metres: f64,
    /// Samples sent for assay.
    pub samples: u64,
    /// Drilling plus assay cost.
    pub cost: f64,
}

/// Drilling for one body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillResult {
    /// Body id.
    pub body_id: Uuid,
    /// Body name.
    pub name: String,
    /// Length of every hole (m).
    pub hole_depth: f64,
    /// Coarse grid.
    pub initial: PhaseResult,
    /// Infill holes beyond the coarse grid.
    pub detailed: PhaseResult,
}

/// One phase summed over all bodies.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhaseTotals {
    /// Hole count.
    pub holes: u32,
    /// Metres drilled.
    pub metres: f64,
    /// Samples sent for assay.
    pub samples: u64,
    /// Metres × cost per metre.
    pub drilling_cost: f64,
    /// Samples × cost per sample.
    pub assay_cost: f64,
}

impl PhaseTotals {
    /// Drilling plus assay cost, mobilization excluded.
    pub fn cost(&self) -> f64 {
        self.drilling_cost + self.assay_cost
    }
}

/// A stage of the campaign calendar. `end` is the date the next stage starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStage {
    /// Duration in days.
    pub days: u32,
    /// First day.
    pub start: Date,
    /// Day the stage hands over to the next one.
    pub end: Date,
}

/// Sequential mobilization → phase 1 → phase 2 calendar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Mobilization and site preparation.
    pub mobilization: ScheduleStage,
    /// Initial drilling.
    pub phase1: ScheduleStage,
    /// Detailed drilling.
    pub phase2: ScheduleStage,
    /// Sum of stage durations.
    pub total_days: u32,
}

/// Campaign cost and schedule rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignResult {
    /// Per-body results.
    pub bodies: Vec<DrillResult>,
    /// Initial phase totals.
    pub initial: PhaseTotals,
    /// Detailed phase totals.
    pub detailed: PhaseTotals,
    /// Mobilization, charged once.
    pub mobilization_cost: f64,
    /// Mobilization + both phases.
    pub total_cost: f64,
    /// Holes in both phases.
    pub total_holes: u32,
    /// Metres in both phases.
    pub total_metres: f64,
    /// Holes per hectare of drilled vein plane.
    pub drilling_density: f64,
    /// Calendar.
    pub schedule: Schedule,
}
