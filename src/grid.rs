use crate::*;
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// A heightfield over a regular lattice.
///
/// The grid is laid out row-major: row 0 is the `+y` edge of the plane and columns increase
/// along `+x`. Only the elevations vary per vertex; the lattice and the row/column counts are
/// fixed at construction and the grid is never mutated afterwards.
///
/// > `PartialEq` is derived and is _exact_ on the float values. This is useful for testing
/// determinism but should not be used for value equality.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "GridParts")]
pub struct Grid {
    /// The x,y at row 0, column 0.
    origin: Point2,

    /// The column count, such that the zs are stored row-first.
    stride: usize,

    /// Distance between neighbouring vertices along x and y.
    spacing: Point2,

    /// The elevations.
    zs: Vec<f64>,
}

/// The serialized fields of a [`Grid`], checked before they become one.
#[derive(serde::Deserialize)]
struct GridParts {
    origin: Point2,
    stride: usize,
    spacing: Point2,
    zs: Vec<f64>,
}

impl TryFrom<GridParts> for Grid {
    type Error = Error;

    fn try_from(parts: GridParts) -> Result<Self> {
        let GridParts {
            origin,
            stride,
            spacing,
            zs,
        } = parts;

        let rows = zs.len().checked_div(stride).unwrap_or(0);
        if stride < 2 || rows < 2 {
            return Err(Error::DegenerateGrid { cols: stride, rows });
        }
        if zs.len() != stride * rows {
            return Err(Error::ElevationCount {
                expected: stride * (rows + 1),
                found: zs.len(),
            });
        }
        if !config::indexable(stride as u64, rows as u64) {
            return Err(Error::TooManyVertices {
                width_segments: stride - 1,
                height_segments: rows - 1,
            });
        }

        for (name, value) in [("origin x", origin.x), ("origin y", origin.y)] {
            if !value.is_finite() {
                return Err(Error::InvalidDimension { name, value });
            }
        }
        if let Some(s) = [spacing.x, spacing.y]
            .into_iter()
            .find(|s| !s.is_finite() || *s <= 0.0)
        {
            return Err(Error::InvalidSpacing(s));
        }
        if let Some((index, &value)) = zs.iter().enumerate().find(|(_, z)| !z.is_finite()) {
            return Err(Error::InvalidElevation { index, value });
        }

        Ok(Self {
            origin,
            stride,
            spacing,
            zs,
        })
    }
}

/// A reference to a single vertex of a [`Grid`].
#[derive(Copy, Clone)]
pub struct GridPoint<'a> {
    pub grid: &'a Grid,
    pub z: f64,
    row: usize,
    col: usize,
}

impl Grid {
    /// Build a grid with every elevation sampled uniformly from `[0, config.max_height]`.
    ///
    /// One sample is drawn per vertex, in row-major order, so a seeded `rng` reproduces the
    /// same grid.
    pub fn generate<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let dist = Uniform::new_inclusive(0.0, config.max_height);
        let len = config.cols() * config.rows();
        let zs = (0..len).map(|_| dist.sample(rng)).collect();
        Ok(Self::build(config, zs))
    }

    /// Build a grid from known elevations, supplied row-major.
    pub fn with_elevations(config: &Config, zs: Vec<f64>) -> Result<Self> {
        config.validate()?;
        let expected = config.cols() * config.rows();
        if zs.len() != expected {
            return Err(Error::ElevationCount {
                expected,
                found: zs.len(),
            });
        }

        if let Some((index, &value)) = zs.iter().enumerate().find(|(_, z)| !z.is_finite()) {
            return Err(Error::InvalidElevation { index, value });
        }

        Ok(Self::build(config, zs))
    }

    /// A grid with all elevations at zero.
    pub fn flat(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::with_elevations(config, vec![0.0; config.cols() * config.rows()])
    }

    fn build(config: &Config, zs: Vec<f64>) -> Self {
        let origin = Point2::new(-config.plane_width * 0.5, config.plane_height * 0.5);
        let spacing = Point2::new(
            config.plane_width / config.width_segments as f64,
            config.plane_height / config.height_segments as f64,
        );

        Self {
            origin,
            stride: config.cols(),
            spacing,
            zs,
        }
    }

    /// The x,y of the first vertex (row 0, column 0).
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// The number of vertices in each row.
    pub fn cols(&self) -> usize {
        self.stride
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.zs.len() / self.stride
    }

    pub fn spacing(&self) -> Point2 {
        self.spacing
    }

    /// The number of vertices (`cols * rows`).
    pub fn len(&self) -> usize {
        self.zs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zs.is_empty()
    }

    /// The elevations, row-major.
    pub fn elevations(&self) -> &[f64] {
        &self.zs
    }

    /// Returns the plan coordinates of a `row` and `col`.
    pub fn get_xy(&self, row: usize, col: usize) -> Point2 {
        Point2::new(
            self.origin.x + col as f64 * self.spacing.x,
            self.origin.y - row as f64 * self.spacing.y,
        )
    }

    /// # Panics
    /// Panics if `row` or `col` is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Point3 {
        self.point(row, col).p3()
    }

    pub fn point(&self, row: usize, col: usize) -> GridPoint {
        GridPoint {
            grid: self,
            z: self.zs[self.idx(row, col)],
            row,
            col,
        }
    }

    /// Get a point by vertex number rather than location.
    ///
    /// # Panics
    /// Panics if `idx` is outside the grid.
    pub fn get_idx(&self, idx: usize) -> Point3 {
        let row = idx / self.stride;
        let col = idx - row * self.stride;
        self.get(row, col)
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        if col >= self.stride {
            panic!("column '{}' is outside grid bounds", col);
        }
        let a = self.stride * row;
        if a >= self.zs.len() {
            panic!("row '{}' is outside grid bounds", row);
        }

        a + col
    }

    /// All vertices, row-major.
    pub fn points(&self) -> impl ExactSizeIterator<Item = GridPoint> + '_ {
        let stride = self.stride;
        self.zs.iter().enumerate().map(move |(i, &z)| GridPoint {
            grid: self,
            z,
            row: i / stride,
            col: i % stride,
        })
    }

    /// The triangle index buffer of the grid surface.
    ///
    /// Each cell with corners `a` (top left), `b` (below a), `c` (below right) and `d` (right of
    /// a) is split into the triangles `(a, b, d)` and `(b, c, d)`. Cells are visited row-major.
    pub fn tri_indices(&self) -> Vec<(u32, u32, u32)> {
        let cols = self.cols();
        let cells = (0..self.rows().saturating_sub(1))
            .flat_map(|row| (0..cols.saturating_sub(1)).map(move |col| (row, col)));

        let mut triangles = Vec::with_capacity(2 * (cols - 1) * (self.rows() - 1));
        for (row, col) in cells {
            let a = (row * cols + col) as u32;
            let b = a + cols as u32;
            let c = b + 1;
            let d = a + 1;
            triangles.push((a, b, d));
            triangles.push((b, c, d));
        }

        triangles
    }

    /// The ordered boundary loop of this grid.
    pub fn perimeter(&self) -> Perimeter {
        Perimeter::of_grid(self)
    }
}

impl<'a> GridPoint<'a> {
    pub fn loc(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Index in backing data structure (the vertex number).
    pub fn idx(&self) -> usize {
        self.grid.idx(self.row, self.col)
    }

    pub fn p2(&self) -> Point2 {
        self.grid.get_xy(self.row, self.col)
    }

    pub fn p3(&self) -> Point3 {
        self.p2().with_z(self.z)
    }
}

impl fmt::Debug for GridPoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "GridPoint: ({row}, {col}) -> {z}",
            row = self.row,
            col = self.col,
            z = self.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn new_grid() {
        let g = Grid::flat(&Config::default()).unwrap();
        assert_eq!(g.origin(), Point2::new(-5.0, 2.5));
        assert_eq!(g.cols(), 21);
        assert_eq!(g.rows(), 11);
        assert_eq!(g.spacing(), Point2::new(0.5, 0.5));
        assert_eq!(g.len(), 231);
    }

    #[test]
    fn get_xy_test() {
        let g = dummy_grid();
        assert_eq!(g.get_xy(0, 0), Point2::new(-1.0, 1.0));
        assert_eq!(g.get_xy(0, 1), Point2::new(1.0, 1.0));
        assert_eq!(g.get_xy(1, 0), Point2::new(-1.0, 0.0));
        assert_eq!(g.get_xy(2, 1), Point2::new(1.0, -1.0));
    }

    #[test]
    fn populate_grid() {
        let g = dummy_grid();

        assert_eq!(g.elevations(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(g.get(0, 0), Point3::new(-1.0, 1.0, 1.0));
        assert_eq!(g.get(0, 1), Point3::new(1.0, 1.0, 2.0));
        assert_eq!(g.get(1, 0), Point3::new(-1.0, 0.0, 3.0));
        assert_eq!(g.get(2, 1), Point3::new(1.0, -1.0, 6.0));
        assert_eq!(g.get_idx(3), g.get(1, 1));
    }

    #[test]
    fn grid_points() {
        let g = dummy_grid();
        let mut points = g.points();
        assert_eq!(points.len(), 6);

        let p = points.next().unwrap();
        assert_eq!(p.loc(), (0, 0));
        assert_eq!(p.idx(), 0);
        assert_eq!(p.p3(), Point3::new(-1.0, 1.0, 1.0));

        assert_eq!(
            points.next().map(|p| (p.idx(), p.p3())),
            Some((1, Point3::new(1.0, 1.0, 2.0)))
        );
        assert_eq!(
            points.next().map(|p| (p.idx(), p.loc())),
            Some((2, (1, 0)))
        );
        assert_eq!(points.last().map(|p| p.idx()), Some(5));
    }

    #[test]
    fn tri_indices_winding() {
        let g = dummy_grid();
        assert_eq!(g.tri_indices(), vec![(0, 2, 1), (2, 3, 1), (2, 4, 3), (4, 5, 3)]);

        let g = Grid::flat(&Config::default()).unwrap();
        assert_eq!(g.tri_indices().len(), 2 * 20 * 10);
    }

    #[test]
    fn elevation_validation() {
        let c = dummy_config();
        assert_eq!(
            Grid::with_elevations(&c, vec![0.0; 5]),
            Err(Error::ElevationCount {
                expected: 6,
                found: 5
            })
        );

        let e = Grid::with_elevations(&c, vec![0.0, 0.0, f64::NAN, 0.0, 0.0, 0.0]);
        assert!(matches!(e, Err(Error::InvalidElevation { index: 2, .. })));
    }

    #[test]
    fn generated_within_bounds() {
        let c = Config::default();
        let mut rng = StdRng::seed_from_u64(7);
        let g = Grid::generate(&c, &mut rng).unwrap();
        assert_eq!(g.len(), c.cols() * c.rows());
        assert!(g.elevations().iter().all(|&z| (0.0..=c.max_height).contains(&z)));

        // same seed, same grid
        let g2 = Grid::generate(&c, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(g, g2);
    }

    #[test]
    fn generated_flat_when_no_height() {
        let c = Config {
            max_height: 0.0,
            ..Config::default()
        };
        let g = Grid::generate(&c, &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(g.elevations().iter().all(|&z| z == 0.0));
    }

    fn parts(g: &Grid) -> GridParts {
        GridParts {
            origin: g.origin,
            stride: g.stride,
            spacing: g.spacing,
            zs: g.zs.clone(),
        }
    }

    #[test]
    fn grid_from_parts() {
        let g = dummy_grid();
        assert_eq!(Grid::try_from(parts(&g)), Ok(g.clone()));

        let p = GridParts {
            stride: 0,
            zs: Vec::new(),
            ..parts(&g)
        };
        assert_eq!(
            Grid::try_from(p),
            Err(Error::DegenerateGrid { cols: 0, rows: 0 })
        );

        // a single column cannot form a perimeter
        let p = GridParts {
            stride: 1,
            ..parts(&g)
        };
        assert_eq!(
            Grid::try_from(p),
            Err(Error::DegenerateGrid { cols: 1, rows: 6 })
        );

        let p = GridParts {
            zs: vec![0.0; 7],
            ..parts(&g)
        };
        assert_eq!(
            Grid::try_from(p),
            Err(Error::ElevationCount {
                expected: 8,
                found: 7
            })
        );

        let p = GridParts {
            spacing: Point2::new(1.0, 0.0),
            ..parts(&g)
        };
        assert_eq!(Grid::try_from(p), Err(Error::InvalidSpacing(0.0)));

        let mut p = parts(&g);
        p.zs[4] = f64::INFINITY;
        assert!(matches!(
            Grid::try_from(p),
            Err(Error::InvalidElevation { index: 4, .. })
        ));
    }

    #[test]
    fn generate_rejects_unsampleable_height() {
        let c = Config {
            max_height: f64::MAX,
            ..Config::default()
        };
        let e = Grid::generate(&c, &mut StdRng::seed_from_u64(1));
        assert_eq!(e, Err(Error::InvalidMaxHeight(f64::MAX)));
    }
}
