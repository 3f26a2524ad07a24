//! One-parameter sensitivity sweeps over the estimator.

use explo_model::{Classification, MineralizedBody};
use serde::{Deserialize, Serialize};

use crate::estimate::estimate;

/// Lowest value a swept parameter may take.
pub const SWEEP_FLOOR: f64 = 0.1;

/// Body parameter to vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepParameter {
    /// Grade; output is contained metal in the body's metal unit.
    Grade,
    /// Thickness; output is adjusted tonnage.
    Thickness,
}

impl SweepParameter {
    /// Current value on a body.
    pub fn base_value(self, body: &MineralizedBody) -> f64 {
        match self {
            SweepParameter::Grade => body.grade,
            SweepParameter::Thickness => body.thickness,
        }
    }

    fn apply(self, body: &mut MineralizedBody, value: f64) {
        match self {
            SweepParameter::Grade => body.grade = value,
            SweepParameter::Thickness => body.thickness = value,
        }
    }
}

/// Sweep bounds as fractions of the base value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRange {
    /// Fraction for the first value.
    pub low_fraction: f64,
    /// Fraction for the last value.
    pub high_fraction: f64,
}

impl SweepRange {
    /// Half to one and a half times the base value.
    pub const HALF_TO_ONE_AND_HALF: SweepRange = SweepRange {
        low_fraction: 0.5,
        high_fraction: 1.5,
    };
}

/// One (input, output) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Parameter value.
    pub input: f64,
    /// Estimator output at that value.
    pub output: f64,
}

/// Result of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sweep {
    /// Body name.
    pub name: String,
    /// Varied parameter.
    pub parameter: SweepParameter,
    /// Points from the low bound to the high bound. Inputs descend when
    /// `base × high` falls below [`SWEEP_FLOOR`].
    pub points: Vec<SweepPoint>,
}

/// Evenly spaced values from `low` to `high`, both included.
fn linspace(low: f64, high: f64, steps: usize) -> impl Iterator<Item = f64> {
    let step = if steps > 1 {
        (high - low) / (steps - 1) as f64
    } else {
        0.0
    };
    (0..steps).map(move |i| low + i as f64 * step)
}

/// Re-run the estimator for `steps` values of one parameter.
///
/// Values run from `max(0.1, base × low)` to `base × high`, ends included;
/// every other input stays at the body's current value. One step yields
/// only the low end. A base small enough that `base × high` is under the
/// floor gives a descending run from the floor down to `base × high`.
pub fn sweep(
    body: &MineralizedBody,
    classification: Classification,
    parameter: SweepParameter,
    range: SweepRange,
    steps: usize,
) -> Sweep {
    let base = parameter.base_value(body);
    let low = (base * range.low_fraction).max(SWEEP_FLOOR);
    let high = base * range.high_fraction;

    let mut varied = body.clone();
    let points = linspace(low, high, steps)
        .map(|value| {
            parameter.apply(&mut varied, value);
            let result = estimate(&varied, classification);
            let output = match parameter {
                SweepParameter::Grade => result.metal_quantity,
                SweepParameter::Thickness => result.tonnage_adjusted,
            };
            SweepPoint {
                input: value,
                output,
            }
        })
        .collect();

    Sweep {
        name: body.name.clone(),
        parameter,
        points,
    }
}
