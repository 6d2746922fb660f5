use crate::*;
use rand::Rng;

/// A heightfield closed into a solid, with its measures.
///
/// Everything is computed once on construction, in order: the grid, its top surface, the
/// perimeter loop, the skirt hanging from the loop, and finally the measures. Nothing is
/// mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Mountain {
    grid: Grid,
    surface: TriMesh,
    perimeter: Perimeter,
    skirt: TriMesh,
    measures: Measures,
}

impl Mountain {
    /// Raise a mountain with random elevations drawn from `rng`.
    pub fn generate<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<Self> {
        let grid = Grid::generate(config, rng)?;
        log::debug!(
            "generated {}x{} grid with elevations in [0, {}]",
            grid.cols(),
            grid.rows(),
            config.max_height
        );
        Ok(Self::from_grid(grid))
    }

    /// Close and measure an existing grid.
    pub fn from_grid(grid: Grid) -> Self {
        let surface = TriMesh::from(&grid);
        log::debug!("surface mesh has {} triangles", surface.tri_len());

        let perimeter = grid.perimeter();
        log::debug!("perimeter loop has {} vertices", perimeter.len());

        let skirt = skirt(&grid, &perimeter);
        let measures = Measures::new(&surface, &skirt);
        log::info!(
            "volume {:.2}, surface area {:.2}, side area {:.2}",
            measures.volume,
            measures.surface_area,
            measures.side_area
        );

        Self {
            grid,
            surface,
            perimeter,
            skirt,
            measures,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The top surface mesh.
    pub fn surface(&self) -> &TriMesh {
        &self.surface
    }

    pub fn perimeter(&self) -> &Perimeter {
        &self.perimeter
    }

    /// The side wall mesh.
    pub fn skirt(&self) -> &TriMesh {
        &self.skirt
    }

    pub fn measures(&self) -> Measures {
        self.measures
    }

    /// The plan footprint, the floor the mountain stands on.
    pub fn footprint(&self) -> Polygon2 {
        self.perimeter.footprint(&self.grid)
    }
}
