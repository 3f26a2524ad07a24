#![warn(missing_docs)]

//! Estimation and campaign-planning kernel for explo.
//!
//! Every function here is a pure computation over [`explo_model`] records:
//! vein frames and display solids, spacing-based classification, tonnage
//! and metal estimates, drill grids, campaign cost and calendar, and
//! one-parameter sensitivity sweeps. Inputs are expected to have passed the
//! model's `validate()` checks.
//!
//! Every body is centred on the same horizontal origin. Bodies are not
//! placed relative to each other, and grids and display solids of
//! different bodies overlap.
//!
//! # Example
//!
//! ```
//! use explo_kernel::{estimate_scenario, plan};
//! use explo_model::{
//!     ClassificationThresholds, CostParameters, DrillOrientation, DrillParameters, DrillType,
//!     GradeUnit, MeshSpacing, MineralizedBody, ScheduleParameters, Uuid,
//! };
//!
//! let body = MineralizedBody {
//!     id: Uuid::new_v4(),
//!     name: "Vein-1".into(),
//!     strike_length: 100.0,
//!     thickness: 5.0,
//!     depth_extent: 200.0,
//!     grade: 1.5,
//!     grade_unit: GradeUnit::MassPerTonne,
//!     density: 2.7,
//!     azimuth: 90.0,
//!     dip: 60.0,
//!     roof_elevation: -50.0,
//! };
//! let thresholds = ClassificationThresholds {
//!     measured_max_spacing: 50.0,
//!     indicated_max_spacing: 100.0,
//!     measured_factor: 0.95,
//!     indicated_factor: 0.8,
//!     inferred_factor: 0.6,
//! };
//!
//! let estimate = estimate_scenario(&[body.clone()], MeshSpacing::square(75.0), &thresholds);
//! assert_eq!(estimate.total_tonnage_adjusted.round(), 216_000.0);
//!
//! let params = DrillParameters {
//!     drill_type: DrillType::DiamondCore,
//!     initial_spacing: MeshSpacing::square(100.0),
//!     detailed_spacing: MeshSpacing::square(50.0),
//!     orientation: DrillOrientation { azimuth: 270.0, dip: 60.0 },
//!     max_hole_depth: 300.0,
//!     costs: CostParameters {
//!         cost_per_metre: 150.0,
//!         mobilization_cost: 50_000.0,
//!         cost_per_sample: 30.0,
//!         sample_length: 1.0,
//!     },
//!     schedule: ScheduleParameters {
//!         metres_per_day: 100.0,
//!         mobilization_days: 15,
//!         start_date: explo_model::Date::from_calendar_date(2025, time::Month::March, 1)?,
//!     },
//! };
//! let campaign = plan(&[body], &params);
//! assert_eq!(campaign.total_holes, 16);
//! # Ok::<(), time::error::ComponentRange>(())
//! ```

pub mod campaign;
pub mod classify;
pub mod estimate;
pub mod geometry;
pub mod grid;
pub mod schedule;
pub mod sensitivity;

pub use explo_math::{Point3, Vec3};

pub use campaign::{drill_plan, phase_result, plan, plan_selected, select_bodies};
pub use classify::{classify, classify_mesh};
pub use estimate::{contained_metal, estimate, estimate_scenario, volume};
pub use geometry::{
    axis_guides, body_geometry, oriented_box, surface_grid, AxisGuides, BodyGeometry,
    OrientedBox, VeinFrame, BOX_FACES, DIP_GUIDE_LENGTH,
};
pub use grid::{
    drill_direction, drill_holes, generate_grid, holes_along, phase_hole_counts, BodyHoles,
    DrillGrid, DrillHole, GridNode, GridPhase, PhaseCounts, MAX_HOLES_PER_AXIS,
};
pub use schedule::{drilling_days, schedule};
pub use sensitivity::{sweep, Sweep, SweepParameter, SweepPoint, SweepRange, SWEEP_FLOOR};
