use crate::*;

/// Dimensions of the plane the mountain is raised from.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Extent along x, centred on the origin.
    pub plane_width: f64,
    /// Extent along y, centred on the origin.
    pub plane_height: f64,
    /// Number of cells along x.
    pub width_segments: usize,
    /// Number of cells along y.
    pub height_segments: usize,
    /// Upper bound of the sampled elevations.
    pub max_height: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plane_width: 10.0,
            plane_height: 5.0,
            width_segments: 20,
            height_segments: 10,
            max_height: 2.0,
        }
    }
}

impl Config {
    /// Vertices along x.
    pub fn cols(&self) -> usize {
        self.width_segments.saturating_add(1)
    }

    /// Vertices along y.
    pub fn rows(&self) -> usize {
        self.height_segments.saturating_add(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width_segments == 0 || self.height_segments == 0 {
            return Err(Error::DegenerateGrid {
                cols: self.cols(),
                rows: self.rows(),
            });
        }

        for (name, value) in [("width", self.plane_width), ("height", self.plane_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidDimension { name, value });
            }
        }

        // the sampler scales its range by 1 / (1 - ε), which must stay finite
        let m = self.max_height;
        if !m.is_finite() || m < 0.0 || !(m / (1.0 - f64::EPSILON)).is_finite() {
            return Err(Error::InvalidMaxHeight(m));
        }

        let cols = (self.width_segments as u64).saturating_add(1);
        let rows = (self.height_segments as u64).saturating_add(1);
        if !indexable(cols, rows) {
            return Err(Error::TooManyVertices {
                width_segments: self.width_segments,
                height_segments: self.height_segments,
            });
        }

        Ok(())
    }
}

/// Whether every vertex of a `cols * rows` grid, and every point of its skirt, has a `u32` index.
pub(crate) fn indexable(cols: u64, rows: u64) -> bool {
    let limit = u32::MAX as u64;
    let skirt = cols.checked_add(rows).and_then(|n| n.checked_mul(4));
    matches!(cols.checked_mul(rows), Some(n) if n <= limit) && matches!(skirt, Some(n) if n <= limit)
}
