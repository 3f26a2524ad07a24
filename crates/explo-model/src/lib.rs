#![warn(missing_docs)]

//! Records for the explo exploration-target estimator.
//!
//! This crate defines the plain data that flows in and out of the
//! estimation kernel: vein bodies, classification thresholds, drill
//! campaign parameters, scenarios, and the derived result records.
//!
//! The records are purely declarative. Computation lives in
//! `explo-kernel`; validation of user input lives here, at the boundary,
//! so that the kernel only ever sees values inside their documented domain.
//!
//! # Example
//!
//! ```
//! use explo_model::{GradeUnit, MineralizedBody, Scenario, Uuid};
//!
//! let mut scenario = Scenario::today("Base case");
//! scenario.add_body(MineralizedBody {
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
//! })?;
//!
//! let json = scenario.to_json()?;
//! assert_eq!(Scenario::from_json(&json)?, scenario);
//! # Ok::<(), explo_model::ModelError>(())
//! ```

pub mod body;
pub mod classification;
pub mod drilling;
pub mod error;
pub mod results;
pub mod scenario;
pub mod session;

pub use body::{GradeUnit, MetalUnit, MineralizedBody, GRAMS_PER_TROY_OUNCE};
pub use classification::{Classification, ClassificationThresholds, MeshSpacing, ResourceClass};
pub use drilling::{
    CostParameters, DrillOrientation, DrillParameters, DrillPlan, DrillType, ScheduleParameters,
};
pub use error::{ModelError, Result};
pub use results::{
    CampaignResult, DrillResult, EstimationResult, PhaseResult, PhaseTotals, ScenarioEstimate,
    Schedule, ScheduleStage,
};
pub use scenario::Scenario;
pub use session::{Session, DEFAULT_SCENARIO_NAME};

pub use time::Date;
pub use uuid::Uuid;
