use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A grid needs at least one segment (two vertices) along each axis.
    #[error("grid of {cols}x{rows} vertices is degenerate, need at least 2x2")]
    DegenerateGrid { cols: usize, rows: usize },

    #[error("plane {name} must be finite and positive, found {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("max height must be non-negative and small enough to sample, found {0}")]
    InvalidMaxHeight(f64),

    /// Vertex and skirt indices are `u32`.
    #[error("a grid of {width_segments}x{height_segments} segments has too many vertices to index")]
    TooManyVertices {
        width_segments: usize,
        height_segments: usize,
    },

    #[error("grid spacing must be finite and positive, found {0}")]
    InvalidSpacing(f64),

    #[error("triangle {triangle:?} references a point outside the {points} points")]
    PointIndex {
        triangle: (u32, u32, u32),
        points: usize,
    },

    #[error("expecting {expected} elevations, found {found}")]
    ElevationCount { expected: usize, found: usize },

    #[error("elevation at vertex {index} is not finite ({value})")]
    InvalidElevation { index: usize, value: f64 },

    #[error("expecting a vertex count of {expected}, found {found}")]
    VertexCount { expected: usize, found: usize },
}
