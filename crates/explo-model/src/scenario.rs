//! Scenarios, the unit of persistence.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::body::{GradeUnit, MineralizedBody};
use crate::drilling::DrillPlan;
use crate::error::{ModelError, Result};

/// A named set of vein bodies with an optional drill plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Creation date, serialized as `YYYY-MM-DD`.
    pub creation_date: Date,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Project or site location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Main commodity (gold, copper, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_substance: Option<String>,
    /// Grade unit the scenario reports in by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_unit: Option<GradeUnit>,
    /// Bodies in insertion order.
    #[serde(default)]
    pub bodies: Vec<MineralizedBody>,
    /// Saved drill campaign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drill_plan: Option<DrillPlan>,
}

impl Scenario {
    /// Create an empty scenario dated `creation_date`.
    pub fn new(name: impl Into<String>, creation_date: Date) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            creation_date,
            description: None,
            location: None,
            main_substance: None,
            measurement_unit: None,
            bodies: Vec::new(),
            drill_plan: None,
        }
    }

    /// Create an empty scenario dated today (UTC).
    pub fn today(name: impl Into<String>) -> Self {
        Self::new(name, OffsetDateTime::now_utc().date())
    }

    /// Copy under a new id and name, with every body copied under a new id.
    pub fn duplicate(&self, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            bodies: self.bodies.iter().map(MineralizedBody::duplicate).collect(),
            ..self.clone()
        }
    }

    /// Look up a body by id.
    pub fn body(&self, id: Uuid) -> Option<&MineralizedBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Look up a body by display name (first match).
    pub fn body_named(&self, name: &str) -> Option<&MineralizedBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Validate and append a body.
    pub fn add_body(&mut self, body: MineralizedBody) -> Result<()> {
        body.validate()?;
        if self.bodies.iter().any(|b| b.name == body.name) {
            log::warn!(
                "scenario '{}' already has a body named '{}'",
                self.name,
                body.name
            );
        }
        self.bodies.push(body);
        Ok(())
    }

    /// Validate and replace the body with the same id.
    pub fn replace_body(&mut self, body: MineralizedBody) -> Result<()> {
        body.validate()?;
        let slot = self
            .bodies
            .iter_mut()
            .find(|b| b.id == body.id)
            .ok_or(ModelError::BodyNotFound(body.id))?;
        *slot = body;
        Ok(())
    }

    /// Remove a body, returning it.
    pub fn remove_body(&mut self, id: Uuid) -> Result<MineralizedBody> {
        let idx = self
            .bodies
            .iter()
            .position(|b| b.id == id)
            .ok_or(ModelError::BodyNotFound(id))?;
        Ok(self.bodies.remove(idx))
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::sample_body;
    use crate::drilling::sample_parameters;
    use crate::results::{CampaignResult, PhaseTotals, Schedule, ScheduleStage};
    use time::macros::date;

    fn sample_scenario() -> Scenario {
        let mut scenario = Scenario::new("Base case", date!(2025 - 01 - 15));
        scenario.description = Some("Two parallel quartz veins".into());
        scenario.main_substance = Some("gold".into());
        scenario.measurement_unit = Some(GradeUnit::MassPerTonne);
        scenario.add_body(sample_body("Vein-1")).unwrap();
        let mut copper = sample_body("Vein-2");
        copper.grade_unit = GradeUnit::Percent;
        copper.grade = 2.1;
        scenario.add_body(copper).unwrap();
        scenario
    }

    fn empty_campaign() -> CampaignResult {
        let day = date!(2025 - 03 - 01);
        let stage = ScheduleStage {
            days: 0,
            start: day,
            end: day,
        };
        CampaignResult {
            bodies: Vec::new(),
            initial: PhaseTotals::default(),
            detailed: PhaseTotals::default(),
            mobilization_cost: 0.0,
            total_cost: 0.0,
            total_holes: 0,
            total_metres: 0.0,
            drilling_density: 0.0,
            schedule: Schedule {
                mobilization: stage,
                phase1: stage,
                phase2: stage,
                total_days: 0,
            },
        }
    }

    #[test]
    fn roundtrip_scenario() {
        let mut scenario = sample_scenario();
        scenario.drill_plan = Some(DrillPlan {
            creation_date: date!(2025 - 02 - 01),
            parameters: sample_parameters(),
            drilled_bodies: vec!["Vein-1".into()],
            campaign: empty_campaign(),
        });

        let json = scenario.to_json().expect("serialize");
        let restored = Scenario::from_json(&json).expect("deserialize");

        assert_eq!(scenario, restored);
        assert_eq!(restored.bodies.len(), 2);
        assert_eq!(restored.measurement_unit, Some(GradeUnit::MassPerTonne));
        assert!(json.contains("\"measurement_unit\""));
        assert_eq!(restored.id, scenario.id);
    }

    #[test]
    fn creation_date_is_iso() {
        let json = sample_scenario().to_json().unwrap();
        assert!(json.contains(r#""creation_date": "2025-01-15""#));
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let scenario = Scenario::new("Bare", date!(2024 - 12 - 31));
        let json = serde_json::json!({
            "id": scenario.id,
            "name": "Bare",
            "creation_date": "2024-12-31",
        });
        let restored: Scenario = serde_json::from_value(json).unwrap();
        assert_eq!(restored, scenario);
        assert_eq!(restored.measurement_unit, None);
        assert!(!scenario.to_json().unwrap().contains("measurement_unit"));
    }

    #[test]
    fn add_body_rejects_invalid() {
        let mut scenario = sample_scenario();
        let mut body = sample_body("bad");
        body.density = -1.0;
        assert!(scenario.add_body(body).is_err());
        assert_eq!(scenario.bodies.len(), 2);
    }

    #[test]
    fn replace_and_remove_body() {
        let mut scenario = sample_scenario();
        let mut body = scenario.bodies[0].clone();
        body.thickness = 8.0;
        scenario.replace_body(body.clone()).unwrap();
        assert_eq!(scenario.body(body.id).unwrap().thickness, 8.0);

        let removed = scenario.remove_body(body.id).unwrap();
        assert_eq!(removed.id, body.id);
        assert!(scenario.body(body.id).is_none());
        assert!(matches!(
            scenario.remove_body(body.id),
            Err(ModelError::BodyNotFound(_))
        ));
    }

    #[test]
    fn duplicate_copies_bodies() {
        let scenario = sample_scenario();
        let copy = scenario.duplicate("Variant");
        assert_ne!(copy.id, scenario.id);
        assert_eq!(copy.name, "Variant");
        assert_eq!(copy.bodies.len(), scenario.bodies.len());
        assert_ne!(copy.bodies[0].id, scenario.bodies[0].id);
        assert_eq!(copy.bodies[0].strike_length, scenario.bodies[0].strike_length);
    }

    #[test]
    fn body_named_finds_first() {
        let scenario = sample_scenario();
        assert!(scenario.body_named("Vein-2").is_some());
        assert!(scenario.body_named("Vein-9").is_none());
    }
}
