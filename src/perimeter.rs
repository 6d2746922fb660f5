//! Ordered boundary loop of a grid.
use crate::*;

/// The boundary vertices of a grid, as an ordered closed loop.
///
/// The loop starts at row 0, column 0, runs along row 0, down the last column, back along the
/// last row and up the first column. Every boundary vertex appears exactly once; the loop closes
/// from the last entry back to the first.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Perimeter(Vec<u32>);

/// Which list a boundary vertex is collected into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Pass {
    /// Emitted in traversal order.
    Forward,
    /// Collected top to bottom and emitted reversed after the forward pass.
    Reverse,
}

#[derive(Copy, Clone, Debug)]
struct Loc {
    row: usize,
    col: usize,
    cols: usize,
    rows: usize,
}

struct Rule {
    matches: fn(Loc) -> bool,
    pass: Pass,
}

fn top_row(l: Loc) -> bool {
    l.row == 0
}

fn last_col(l: Loc) -> bool {
    l.col == l.cols - 1
}

fn first_col_or_bottom_row(l: Loc) -> bool {
    l.col == 0 || l.row == l.rows - 1
}

/// Boundary classification, in priority order. The first rule that matches a vertex decides its
/// pass; a vertex no rule matches is interior.
///
/// The order matters at the corners: the top right corner belongs to the top row and the bottom
/// right corner to the last column, which keeps the two passes joining into one loop.
const RULES: [Rule; 3] = [
    Rule {
        matches: top_row,
        pass: Pass::Forward,
    },
    Rule {
        matches: last_col,
        pass: Pass::Forward,
    },
    Rule {
        matches: first_col_or_bottom_row,
        pass: Pass::Reverse,
    },
];

fn classify(loc: Loc) -> Option<Pass> {
    RULES.iter().find(|r| (r.matches)(loc)).map(|r| r.pass)
}

impl Perimeter {
    /// Extract the loop of a row-major grid of `cols * rows` vertices.
    ///
    /// `vertex_count` must equal `cols * rows`, and both dimensions must be at least 2.
    pub fn new(vertex_count: usize, cols: usize, rows: usize) -> Result<Self> {
        if cols < 2 || rows < 2 {
            return Err(Error::DegenerateGrid { cols, rows });
        }
        if vertex_count != cols * rows {
            return Err(Error::VertexCount {
                expected: cols * rows,
                found: vertex_count,
            });
        }

        let mut forward = Vec::with_capacity(cols + rows);
        let mut reverse = Vec::with_capacity(cols + rows);

        for n in 0..vertex_count {
            let loc = Loc {
                row: n / cols,
                col: n % cols,
                cols,
                rows,
            };
            match classify(loc) {
                Some(Pass::Forward) => forward.push(n as u32),
                Some(Pass::Reverse) => reverse.push(n as u32),
                None => (),
            }
        }

        forward.extend(reverse.into_iter().rev());
        debug_assert_eq!(forward.len(), 2 * cols + 2 * rows - 4);

        Ok(Self(forward))
    }

    /// The loop of a [`Grid`], which is always at least 2x2.
    pub fn of_grid(grid: &Grid) -> Self {
        Self::new(grid.len(), grid.cols(), grid.rows())
            .expect("a constructed grid is at least 2x2")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The vertex numbers, in loop order.
    pub fn indices(&self) -> &[u32] {
        &self.0
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    /// Consecutive pairs of the loop, including the closing pair (last, first).
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let next = self.0.iter().skip(1).chain(self.0.first());
        self.0.iter().copied().zip(next.copied())
    }

    /// The loop's points on `grid`.
    pub fn points<'a>(&'a self, grid: &'a Grid) -> impl ExactSizeIterator<Item = Point3> + 'a {
        self.iter().map(move |i| grid.get_idx(i as usize))
    }

    /// The plan footprint enclosed by the loop.
    pub fn footprint(&self, grid: &Grid) -> Polygon2 {
        Polygon2::new(self.points(grid).map(Point3::to_p2))
            .expect("a loop has at least 4 points")
    }
}
