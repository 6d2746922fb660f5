//! Vertical side walls closing a heightfield down to `z = 0`.
use crate::*;

/// Build the skirt hanging from the `perimeter` of `grid`.
///
/// For each loop entry `k` two points are emitted, the elevated boundary point (`2k`) followed by
/// its projection onto `z = 0` (`2k + 1`). Each neighbouring pair of points is stitched into a
/// quad of two triangles, and the last pair joins back to the first, giving `2L` points and `2L`
/// triangles for a loop of length `L`.
pub fn skirt(grid: &Grid, perimeter: &Perimeter) -> TriMesh {
    let points = perimeter
        .points(grid)
        .flat_map(|p| [p, p.flatten()])
        .collect::<Vec<_>>();

    let n = points.len() as u32;
    let mut triangles = Vec::with_capacity(points.len());

    // quads between pair k and pair k + 1
    for o in (0..n.saturating_sub(2)).step_by(2) {
        triangles.push((o, o + 2, o + 3));
        triangles.push((o, o + 3, o + 1));
    }

    // closing quad, last pair back to the first
    if n >= 4 {
        triangles.push((n - 2, 0, n - 1));
        triangles.push((1, n - 1, 0));
    }

    log::debug!(
        "built skirt of {} points and {} triangles from a loop of {}",
        points.len(),
        triangles.len(),
        perimeter.len()
    );

    TriMesh::from_raw(points, triangles)
}
