//! Areas and volumes of triangle meshes.
use crate::*;

/// Area of a triangle, half the magnitude of `(B - A) × (C - A)`.
///
/// Always non-negative, and zero for collinear points.
///
/// # Example
/// ```rust
/// use mountain::*;
/// let a = tri_area([
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ]);
/// assert_eq!(a, 0.5);
/// ```
pub fn tri_area([a, b, c]: Tri) -> f64 {
    0.5 * xprod(b - a, c - a).mag()
}

/// Volume of the right prism between a triangle and its footprint on `z = 0`.
///
/// The footprint area is scaled by the mean elevation of the three corners, which is exact for a
/// planar facet. Corners below `z = 0` contribute negatively.
pub fn prism_volume(tri: Tri) -> f64 {
    let [a, b, c] = tri;
    tri_area(tri.map(Point3::flatten)) * (a.z + b.z + c.z) / 3.0
}

/// Surface area, the sum of every triangle's area.
impl Area for TriMesh {
    fn area(&self) -> f64 {
        self.tris().map(tri_area).sum()
    }
}

impl TriMesh {
    /// The volume between the mesh and the `z = 0` plane, summed over the prism under each
    /// triangle.
    ///
    /// Only meaningful for a mesh with no overlapping triangles in plan, such as a heightfield
    /// surface. Vertical triangles have no footprint and contribute nothing.
    pub fn volume_under(&self) -> f64 {
        self.tris().map(prism_volume).sum()
    }
}

/// The measures of a mountain.
#[derive(Copy, Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Measures {
    /// Area of the top surface.
    pub surface_area: f64,
    /// Area of the skirt.
    pub side_area: f64,
    /// Volume between the top surface and `z = 0`.
    pub volume: f64,
}

impl Measures {
    /// Measure a `surface` and its `skirt`.
    ///
    /// The volume comes from the surface alone, the skirt only adds area.
    pub fn new(surface: &TriMesh, skirt: &TriMesh) -> Self {
        Self {
            surface_area: surface.area(),
            side_area: skirt.area(),
            volume: surface.volume_under(),
        }
    }

    /// Surface and side area together.
    pub fn full_area(&self) -> f64 {
        self.surface_area + self.side_area
    }
}

impl fmt::Display for Measures {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Name: Mountain")?;
        writeln!(f, "  Volume: {:.2} m³", self.volume)?;
        writeln!(f, "  Area (surface): {:.2} m²", self.surface_area)?;
        writeln!(f, "  Area (side): {:.2} m²", self.side_area)?;
        write!(f, "  Area (full): {:.2} m²", self.full_area())
    }
}
