//! Oriented-box model of a vein body.
//!
//! The box built here is for display only. Resource volume ignores
//! orientation and is the straight product of the three extents
//! (see [`crate::estimate::volume`]).

use explo_math::{bearing_vector, horizontal_bearing, Point3, Vec3};
use explo_model::{MeshSpacing, MineralizedBody};
use serde::{Deserialize, Serialize};

/// Length of the dip guide drawn from the body centre (m).
pub const DIP_GUIDE_LENGTH: f64 = 50.0;

/// Triangles of the eight-corner box.
///
/// Corner `i` has sign bits `(i >> 2, (i >> 1) & 1, i & 1)` along
/// (strike, dip, thickness); each pair of triangles closes one face.
pub const BOX_FACES: [[u32; 3]; 12] = [
    // strike −
    [0, 1, 3],
    [0, 3, 2],
    // strike +
    [4, 6, 7],
    [4, 7, 5],
    // dip −
    [0, 4, 5],
    [0, 5, 1],
    // dip +
    [2, 3, 7],
    [2, 7, 6],
    // thickness −
    [0, 2, 6],
    [0, 6, 4],
    // thickness +
    [1, 5, 7],
    [1, 7, 3],
];

/// Local axes and centre of a vein body.
///
/// `strike_axis` and `dip_axis` are orthonormal. `thickness_axis` is a unit
/// vector but leans off the true plane normal at intermediate dips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VeinFrame {
    /// Volumetric centre. x and y are always the shared origin.
    pub center: Point3,
    /// Horizontal, along strike.
    pub strike_axis: Vec3,
    /// Down dip, perpendicular to strike.
    pub dip_axis: Vec3,
    /// Across the vein.
    pub thickness_axis: Vec3,
}

impl VeinFrame {
    /// Build the frame of a body.
    pub fn from_body(body: &MineralizedBody) -> Self {
        let (sin_az, cos_az) = body.azimuth.to_radians().sin_cos();
        let (sin_dip, cos_dip) = body.dip.to_radians().sin_cos();

        Self {
            center: Point3::new(0.0, 0.0, body.roof_elevation - body.thickness * sin_dip / 2.0),
            strike_axis: horizontal_bearing(body.azimuth),
            dip_axis: bearing_vector(body.azimuth + 90.0, body.dip),
            thickness_axis: Vec3::new(-sin_az * sin_dip, -cos_az * sin_dip, -cos_dip),
        }
    }

    /// World point at local offsets along (strike, dip, thickness).
    pub fn to_world(&self, along_strike: f64, along_dip: f64, across: f64) -> Point3 {
        self.center
            + self.strike_axis * along_strike
            + self.dip_axis * along_dip
            + self.thickness_axis * across
    }
}

/// Display solid of a body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrientedBox {
    /// Corners, indexed as documented on [`BOX_FACES`].
    pub vertices: [Point3; 8],
    /// Triangle index triples into `vertices`.
    pub faces: [[u32; 3]; 12],
}

/// Build the eight-corner display solid of a body.
pub fn oriented_box(body: &MineralizedBody) -> OrientedBox {
    let frame = VeinFrame::from_body(body);
    let half = [
        body.strike_length / 2.0,
        body.depth_extent / 2.0,
        body.thickness / 2.0,
    ];
    let sign = |bit: usize| if bit == 0 { -1.0 } else { 1.0 };

    let vertices = std::array::from_fn(|i| {
        frame.to_world(
            sign((i >> 2) & 1) * half[0],
            sign((i >> 1) & 1) * half[1],
            sign(i & 1) * half[2],
        )
    });

    OrientedBox {
        vertices,
        faces: BOX_FACES,
    }
}

/// Line segments marking strike and dip directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisGuides {
    /// Full strike length through the centre.
    pub strike: [Point3; 2],
    /// From the centre, [`DIP_GUIDE_LENGTH`] down dip.
    pub dip: [Point3; 2],
}

/// Strike and dip guides of a body.
pub fn axis_guides(body: &MineralizedBody) -> AxisGuides {
    let frame = VeinFrame::from_body(body);
    let half = body.strike_length / 2.0;
    AxisGuides {
        strike: [frame.to_world(-half, 0.0, 0.0), frame.to_world(half, 0.0, 0.0)],
        dip: [frame.center, frame.to_world(0.0, DIP_GUIDE_LENGTH, 0.0)],
    }
}

/// Surface reference lines at the mesh spacing, covering
/// `[-half_extent, half_extent]` on both horizontal axes.
pub fn surface_grid(spacing: MeshSpacing, half_extent: f64) -> Vec<[Point3; 2]> {
    let ticks = |step: f64| {
        let n = (2.0 * half_extent / step).floor() as usize;
        (0..=n).map(move |i| -half_extent + i as f64 * step)
    };

    let mut lines = Vec::new();
    for x in ticks(spacing.x) {
        lines.push([
            Point3::new(x, -half_extent, 0.0),
            Point3::new(x, half_extent, 0.0),
        ]);
    }
    for y in ticks(spacing.y) {
        lines.push([
            Point3::new(-half_extent, y, 0.0),
            Point3::new(half_extent, y, 0.0),
        ]);
    }
    lines
}

/// Everything a renderer needs to draw one body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyGeometry {
    /// Body name, for legends.
    pub name: String,
    /// Local frame.
    pub frame: VeinFrame,
    /// Display solid.
    pub solid: OrientedBox,
    /// Direction guides.
    pub guides: AxisGuides,
}

/// Bundle frame, solid and guides of a body.
pub fn body_geometry(body: &MineralizedBody) -> BodyGeometry {
    BodyGeometry {
        name: body.name.clone(),
        frame: VeinFrame::from_body(body),
        solid: oriented_box(body),
        guides: axis_guides(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::vein;
    use approx::assert_relative_eq;

    #[test]
    fn test_frame_axes() {
        let body = vein("Vein-1");
        let frame = VeinFrame::from_body(&body);

        // azimuth 90: strike points east
        assert_relative_eq!(frame.strike_axis.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(frame.strike_axis.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(frame.strike_axis.z, 0.0, epsilon = 1e-12);

        // dips 60° toward the south
        assert_relative_eq!(frame.dip_axis.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(frame.dip_axis.y, -0.5, epsilon = 1e-12);
        assert_relative_eq!(frame.dip_axis.z, -(3.0f64.sqrt() / 2.0), epsilon = 1e-12);

        assert_relative_eq!(frame.thickness_axis.x, -(3.0f64.sqrt() / 2.0), epsilon = 1e-12);
        assert_relative_eq!(frame.thickness_axis.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(frame.thickness_axis.z, -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_axes_are_unit_and_strike_perpendicular_to_dip() {
        for (az, dip) in [(0.0, 0.0), (37.0, 15.0), (145.0, 60.0), (300.0, 90.0)] {
            let mut body = vein("v");
            body.azimuth = az;
            body.dip = dip;
            let frame = VeinFrame::from_body(&body);
            assert_relative_eq!(frame.strike_axis.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(frame.dip_axis.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(frame.thickness_axis.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(frame.strike_axis.dot(&frame.dip_axis), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_center_depth() {
        let body = vein("Vein-1");
        let frame = VeinFrame::from_body(&body);
        let expected = -50.0 - 5.0 * 60.0f64.to_radians().sin() / 2.0;
        assert_relative_eq!(frame.center.z, expected, epsilon = 1e-12);
        assert_eq!(frame.center.x, 0.0);
        assert_eq!(frame.center.y, 0.0);
    }

    #[test]
    fn test_flat_body_is_safe() {
        let mut body = vein("flat");
        body.dip = 0.0;
        let frame = VeinFrame::from_body(&body);
        assert_relative_eq!(frame.thickness_axis.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(frame.thickness_axis.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(frame.thickness_axis.z, -1.0, epsilon = 1e-12);
        assert_relative_eq!(frame.center.z, body.roof_elevation, epsilon = 1e-12);
        assert!(oriented_box(&body).vertices.iter().all(|v| v.z.is_finite()));
    }

    #[test]
    fn test_box_corners() {
        let body = vein("Vein-1");
        let frame = VeinFrame::from_body(&body);
        let solid = oriented_box(&body);

        let expected_first = frame.center
            - frame.strike_axis * 50.0
            - frame.dip_axis * 100.0
            - frame.thickness_axis * 2.5;
        assert_relative_eq!((solid.vertices[0] - expected_first).norm(), 0.0, epsilon = 1e-9);

        let expected_last = frame.center
            + frame.strike_axis * 50.0
            + frame.dip_axis * 100.0
            + frame.thickness_axis * 2.5;
        assert_relative_eq!((solid.vertices[7] - expected_last).norm(), 0.0, epsilon = 1e-9);

        // centroid of the corners is the centre
        let sum = solid
            .vertices
            .iter()
            .fold(Vec3::zeros(), |acc, v| acc + v.coords);
        let centroid = sum / 8.0;
        assert_relative_eq!((centroid - frame.center.coords).norm(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_box_faces_cover_each_face() {
        let solid = oriented_box(&vein("Vein-1"));
        let mut used = [false; 8];
        for tri in &solid.faces {
            for &v in tri {
                assert!(v < 8);
                used[v as usize] = true;
            }
            // all three corners lie on one face: they agree on one sign bit
            let shares_face = [4u32, 2, 1]
                .iter()
                .any(|&bit| tri.iter().all(|&v| v & bit == tri[0] & bit));
            assert!(shares_face, "triangle {tri:?} spans faces");
        }
        assert!(used.iter().all(|&u| u));
    }

    #[test]
    fn test_axis_guides() {
        let body = vein("Vein-1");
        let guides = axis_guides(&body);
        assert_relative_eq!(
            (guides.strike[1] - guides.strike[0]).norm(),
            body.strike_length,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            (guides.dip[1] - guides.dip[0]).norm(),
            DIP_GUIDE_LENGTH,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_surface_grid() {
        let lines = surface_grid(MeshSpacing::new(100.0, 50.0), 200.0);
        // 5 lines across x, 9 across y
        assert_eq!(lines.len(), 5 + 9);
        assert!(lines.iter().flatten().all(|p| p.z == 0.0));
        assert_relative_eq!(lines[0][0].x, -200.0);
        assert_relative_eq!(lines[4][0].x, 200.0);
    }

    #[test]
    fn test_body_geometry_serializes() {
        let geometry = body_geometry(&vein("Vein-1"));
        let json = serde_json::to_string(&geometry).unwrap();
        assert!(json.contains("\"faces\""));
        assert!(json.contains("\"strike_axis\""));
    }
}
