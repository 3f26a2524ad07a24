//! Drill hole grids laid out on the vein plane.
//!
//! Holes are placed at cell centres of a regular strike × dip grid in the
//! body's local frame, lifted to the surface, and drilled along one shared
//! direction to one shared depth.

use explo_math::{bearing_vector, on_surface, Point3, Vec3};
use explo_model::{DrillOrientation, DrillParameters, MeshSpacing, MineralizedBody};
use serde::{Deserialize, Serialize};

use crate::geometry::VeinFrame;

/// Drilling phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridPhase {
    /// First pass on the coarse grid.
    Initial,
    /// Infill on the fine grid.
    Detailed,
}

impl GridPhase {
    /// Fixed floor on holes per grid axis.
    pub const fn min_holes_per_axis(self) -> u32 {
        match self {
            GridPhase::Initial => 2,
            GridPhase::Detailed => 4,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            GridPhase::Initial => "initial",
            GridPhase::Detailed => "detailed",
        }
    }
}

/// Cap on holes along one grid axis.
///
/// Keeps a body's grid at no more than a million cells, so per-body counts
/// fit `u32` and traced grids stay allocatable.
pub const MAX_HOLES_PER_AXIS: u32 = 1_000;

/// Holes needed to cover `extent` at `spacing`, never fewer than `min_holes`
/// and never more than [`MAX_HOLES_PER_AXIS`].
pub fn holes_along(extent: f64, spacing: f64, min_holes: u32) -> u32 {
    let needed = (extent / spacing).ceil();
    if needed > MAX_HOLES_PER_AXIS as f64 {
        log::warn!(
            "{extent} m at {spacing} m spacing needs {needed} holes; capped at {MAX_HOLES_PER_AXIS}"
        );
    }
    (needed.min(MAX_HOLES_PER_AXIS as f64) as u32).max(min_holes)
}

/// One cell of a drill grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridNode {
    /// Column along strike.
    pub strike_index: u32,
    /// Row along dip.
    pub dip_index: u32,
    /// Local offset along strike from the body centre (m).
    pub along_strike: f64,
    /// Local offset along dip from the body centre (m).
    pub along_dip: f64,
    /// Surface collar (z = 0).
    pub collar: Point3,
}

/// A regular grid over a body's strike × dip plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillGrid {
    /// Columns along strike.
    pub along_strike: u32,
    /// Rows along dip.
    pub along_dip: u32,
    /// Cells, column-major (strike outer, dip inner).
    pub nodes: Vec<GridNode>,
}

impl DrillGrid {
    /// Number of holes in the grid.
    pub fn hole_count(&self) -> u32 {
        self.along_strike.saturating_mul(self.along_dip)
    }
}

/// Lay out a grid at `spacing` with at least `min_holes` per axis.
///
/// Cell `(i, j)` sits at `−L/2 + (i + ½)·L/nₛ` along strike and
/// `−D/2 + (j + ½)·D/n_d` along dip; its collar is that point of the vein
/// plane moved straight up to the surface.
pub fn generate_grid(
    body: &MineralizedBody,
    frame: &VeinFrame,
    spacing: MeshSpacing,
    min_holes: u32,
) -> DrillGrid {
    let along_strike = holes_along(body.strike_length, spacing.x, min_holes);
    let along_dip = holes_along(body.depth_extent, spacing.y, min_holes);

    let step_strike = body.strike_length / along_strike as f64;
    let step_dip = body.depth_extent / along_dip as f64;

    let mut nodes = Vec::with_capacity(along_strike as usize * along_dip as usize);
    for i in 0..along_strike {
        for j in 0..along_dip {
            let p = -body.strike_length / 2.0 + (i as f64 + 0.5) * step_strike;
            let d = -body.depth_extent / 2.0 + (j as f64 + 0.5) * step_dip;
            nodes.push(GridNode {
                strike_index: i,
                dip_index: j,
                along_strike: p,
                along_dip: d,
                collar: on_surface(&frame.to_world(p, d, 0.0)),
            });
        }
    }

    DrillGrid {
        along_strike,
        along_dip,
        nodes,
    }
}

/// Hole counts of both phases for one body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseCounts {
    /// Full coarse grid.
    pub initial: u32,
    /// Fine grid minus coarse grid, clamped at zero.
    pub detailed: u32,
}

/// Hole counts of both phases.
///
/// Detailed holes are the increment of the fine grid over the coarse one.
/// A fine grid with fewer cells than the coarse grid yields zero detailed
/// holes rather than a negative count.
pub fn phase_hole_counts(
    body: &MineralizedBody,
    initial: MeshSpacing,
    detailed: MeshSpacing,
) -> PhaseCounts {
    let count = |spacing: MeshSpacing, phase: GridPhase| {
        let min = phase.min_holes_per_axis();
        holes_along(body.strike_length, spacing.x, min)
            .saturating_mul(holes_along(body.depth_extent, spacing.y, min))
    };
    let coarse = count(initial, GridPhase::Initial);
    let fine = count(detailed, GridPhase::Detailed);

    if fine < coarse {
        log::warn!(
            "{}: detailed grid has {} cells, fewer than the {} initial holes; no detailed holes planned",
            body.name,
            fine,
            coarse
        );
    }

    PhaseCounts {
        initial: coarse,
        detailed: fine.saturating_sub(coarse),
    }
}

/// Unit direction shared by all holes.
pub fn drill_direction(orientation: &DrillOrientation) -> Vec3 {
    bearing_vector(orientation.azimuth, orientation.dip)
}

/// A planned hole trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrillHole {
    /// Phase tag.
    pub phase: GridPhase,
    /// Grid column along strike.
    pub strike_index: u32,
    /// Grid row along dip.
    pub dip_index: u32,
    /// Surface entry point.
    pub collar: Point3,
    /// End of hole.
    pub end: Point3,
}

/// Hole traces of one body, for display.
///
/// Costing uses [`phase_hole_counts`], not the length of these vectors. The
/// two agree when the fine grid divides the coarse one evenly along each
/// axis; otherwise the traced detailed set can be smaller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyHoles {
    /// Body name.
    pub name: String,
    /// Every coarse-grid cell.
    pub initial: Vec<DrillHole>,
    /// Fine-grid cells not already covered by the coarse grid.
    pub detailed: Vec<DrillHole>,
}

impl BodyHoles {
    /// All holes, initial first.
    pub fn iter(&self) -> impl Iterator<Item = &DrillHole> {
        self.initial.iter().chain(self.detailed.iter())
    }
}

/// Trace every planned hole of a body for display.
///
/// A fine-grid cell whose indices are both multiples of the fine/coarse
/// ratio (integer ratio per axis, at least 1) counts as already drilled by
/// the initial phase and is left out.
///
/// When a ratio floors to 1 (a 5-cell fine axis over a 3-cell coarse one,
/// say) every fine cell on that axis matches, so fewer detailed holes are
/// traced than [`phase_hole_counts`] costs. Campaign figures always come
/// from the counts.
pub fn drill_holes(body: &MineralizedBody, params: &DrillParameters) -> BodyHoles {
    let frame = VeinFrame::from_body(body);
    let direction = drill_direction(&params.orientation) * params.max_hole_depth;

    let coarse = generate_grid(
        body,
        &frame,
        params.initial_spacing,
        GridPhase::Initial.min_holes_per_axis(),
    );
    let fine = generate_grid(
        body,
        &frame,
        params.detailed_spacing,
        GridPhase::Detailed.min_holes_per_axis(),
    );

    let trace = |node: &GridNode, phase: GridPhase| DrillHole {
        phase,
        strike_index: node.strike_index,
        dip_index: node.dip_index,
        collar: node.collar,
        end: node.collar + direction,
    };

    let ratio_strike = (fine.along_strike / coarse.along_strike).max(1);
    let ratio_dip = (fine.along_dip / coarse.along_dip).max(1);

    let initial: Vec<DrillHole> = coarse
        .nodes
        .iter()
        .map(|n| trace(n, GridPhase::Initial))
        .collect();
    let detailed: Vec<DrillHole> = fine
        .nodes
        .iter()
        .filter(|n| !(n.strike_index % ratio_strike == 0 && n.dip_index % ratio_dip == 0))
        .map(|n| trace(n, GridPhase::Detailed))
        .collect();

    log::debug!(
        "{}: {} initial and {} detailed hole traces",
        body.name,
        initial.len(),
        detailed.len()
    );

    BodyHoles {
        name: body.name.clone(),
        initial,
        detailed,
    }
}
