//! Largest rectangle spanned by two vertices of a rectilinear polygon that
//! still lies entirely inside it.
//!
//! The pipeline runs parser → [`compress`] → [`raster`] → [`heights`] →
//! [`evaluate`]; [`contained::process`] chains all of it, while
//! [`bounding::process`] ignores the polygon and serves as an upper bound.

pub mod bounding;
pub mod compress;
pub mod contained;
pub mod error;
pub mod evaluate;
pub mod grid;
pub mod heights;
pub mod input;
pub mod parser;
pub mod raster;
pub mod vertex;

pub use error::PolygonError;
pub use vertex::{Area, GridPos, Point, Vertex};
