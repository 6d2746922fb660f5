use crate::*;

/// A closed plan polygon. The last point joins back to the first.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Polygon2(Vec<Point2>);

impl Polygon2 {
    pub fn new<I>(points: I) -> std::result::Result<Self, &'static str>
    where
        I: IntoIterator<Item = Point2>,
    {
        let points = points.into_iter().collect::<Vec<_>>();
        if points.len() < 3 {
            Err("polygon requires 3 or more points to be valid")
        } else {
            Ok(Polygon2(points))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn pts(&self) -> &[Point2] {
        &self.0
    }
}

impl Area for Polygon2 {
    /// 2D plan area.
    ///
    /// # Example
    /// ```rust
    /// use mountain::*;
    /// let p = Polygon2::new([
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(2.0, 0.0),
    ///     Point2::new(2.0, 3.0),
    ///     Point2::new(0.0, 3.0),
    /// ]).unwrap();
    ///
    /// assert!((p.area() - 6.0).abs() < 1e-3);
    /// ```
    fn area(&self) -> f64 {
        // shoelace
        let pts = self.pts();
        pts.iter()
            .zip(pts.iter().cycle().skip(1))
            .map(|(a, b)| a.x * b.y - a.y * b.x)
            .sum::<f64>()
            .abs()
            * 0.5
    }
}
