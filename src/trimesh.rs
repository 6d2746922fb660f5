use crate::*;

/// Triangle represented by 3 points (A, B, C).
pub type Tri = [Point3; 3];

/// A triangle mesh.
///
/// This is the vertex buffer + index buffer pair handed to whatever renders the mountain.
///
/// `PartialEq` is _derived_ but does _exact_ equality including structural equality. This is
/// **not** the same as value equality (it is a _subset_ of it) so `PartialEq` should not be used
/// for value equality.
#[derive(Debug, PartialEq, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "MeshParts")]
pub struct TriMesh {
    /// The points, which may be duplicated (a skirt copies each boundary point).
    points: Vec<Point3>,
    /// Each _triangle_ is a triplet of points.
    ///
    /// Each tuple entry is the _index_ back into the `points`.
    triangles: Vec<(u32, u32, u32)>,
}

#[derive(serde::Deserialize)]
struct MeshParts {
    points: Vec<Point3>,
    triangles: Vec<(u32, u32, u32)>,
}

impl TryFrom<MeshParts> for TriMesh {
    type Error = Error;

    fn try_from(parts: MeshParts) -> Result<Self> {
        Self::try_from_raw(parts.points, parts.triangles)
    }
}

impl TriMesh {
    /// # Panics
    /// Panics if a triangle references a point outside of `points`.
    pub fn from_raw(points: Vec<Point3>, triangles: Vec<(u32, u32, u32)>) -> Self {
        match Self::try_from_raw(points, triangles) {
            Ok(x) => x,
            Err(e) => panic!("{}", e),
        }
    }

    /// Like [`TriMesh::from_raw`], but an out of bounds triangle is an error.
    pub fn try_from_raw(points: Vec<Point3>, triangles: Vec<(u32, u32, u32)>) -> Result<Self> {
        let len = points.len();
        let outside = |i: u32| i as usize >= len;
        if let Some(&triangle) = triangles
            .iter()
            .find(|(a, b, c)| outside(*a) || outside(*b) || outside(*c))
        {
            return Err(Error::PointIndex {
                triangle,
                points: len,
            });
        }

        Ok(Self { points, triangles })
    }

    pub fn point_len(&self) -> usize {
        self.points.len()
    }

    pub fn tri_len(&self) -> usize {
        self.triangles.len()
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn tri_indices(&self) -> &[(u32, u32, u32)] {
        &self.triangles
    }

    pub fn tris(&self) -> impl ExactSizeIterator<Item = Tri> + '_ {
        self.triangles.iter().map(move |&(a, b, c)| {
            [
                self.points[a as usize],
                self.points[b as usize],
                self.points[c as usize],
            ]
        })
    }

    /// The edges used by an odd number of triangles, as `(low, high)` index pairs, sorted.
    ///
    /// For a manifold mesh these are the open boundary; an empty result means the mesh is closed.
    /// Edges are matched by index, not position, so duplicated points do not join.
    pub fn free_edges(&self) -> Vec<(u32, u32)> {
        let mut open: HashSet<(u32, u32)> =
            HashSet::with_capacity_and_hasher(self.tri_len(), Default::default());

        for &(a, b, c) in &self.triangles {
            for (p, q) in [(a, b), (b, c), (c, a)] {
                let edge = (p.min(q), p.max(q));
                // a second use closes the edge
                if !open.remove(&edge) {
                    open.insert(edge);
                }
            }
        }

        let mut edges = open.into_iter().collect::<Vec<_>>();
        edges.sort_unstable();
        edges
    }
}

/// The top surface of a grid: one point per vertex, two triangles per cell.
impl From<&Grid> for TriMesh {
    fn from(grid: &Grid) -> Self {
        let points = grid.points().map(|p| p.p3()).collect();
        let triangles = grid.tri_indices();
        Self { points, triangles }
    }
}
