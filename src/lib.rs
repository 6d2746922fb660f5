//! Randomized heightfield mountains, closed into solids and measured.
//!
//! A [`Grid`] of random elevations is turned into a top surface [`TriMesh`], the grid's
//! [`Perimeter`] loop is extruded down to `z = 0` as a [`skirt()`], and the [`Measures`] (surface
//! area, side area and volume) are integrated triangle by triangle. [`Mountain`] runs all of it.
use rustc_hash::FxHashSet as HashSet;
use std::fmt;

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod config;
mod error;
mod grid;
mod measure;
mod mountain;
mod perimeter;
mod point;
pub mod polygon;
mod skirt;
mod trimesh;

pub use config::*;
pub use error::*;
pub use grid::*;
pub use measure::*;
pub use mountain::*;
pub use perimeter::*;
pub use point::*;
pub use polygon::*;
pub use skirt::*;
pub use trimesh::*;

/// Area can be calculated from an object.
///
/// Note that area is contextual from the object.
/// For instance, a [`Polygon2`] would be the _plan_ area, a [`TriMesh`] would be the _surface
/// area_, etc.
/// If implementing this trait be sure to be **explicit** about the area being calculated.
pub trait Area {
    /// Calculate the area of an object.
    fn area(&self) -> f64;
}

/// A 2 x 3 grid spanning `[-1, 1]` in both axes, with elevations 1 to 6.
#[cfg(test)]
fn dummy_config() -> Config {
    Config {
        plane_width: 2.0,
        plane_height: 2.0,
        width_segments: 1,
        height_segments: 2,
        max_height: 6.0,
    }
}

#[cfg(test)]
fn dummy_grid() -> Grid {
    let zs = (1..7).map(|z| z as f64).collect();
    Grid::with_elevations(&dummy_config(), zs).unwrap()
}
