use miette::*;

use crate::compress::compress;
use crate::error::PolygonError;
use crate::evaluate::{largest_contained, Evaluation};
use crate::heights::annotate;
use crate::parser::parse_vertices;
use crate::raster::rasterize;
use crate::vertex::Vertex;

/// Runs compression, rasterization, annotation and evaluation over vertices
/// given in boundary order. The vertices' mapped coordinates and cached sizes
/// are updated in place.
pub fn solve(vertices: &mut [Vertex]) -> Result<Evaluation, PolygonError> {
    if vertices.len() < 2 {
        return Ok(Evaluation::default());
    }

    let mut grid = compress(vertices).grid;
    rasterize(&mut grid, vertices)?;
    tracing::trace!("rasterized grid:\n{grid}");

    annotate(&mut grid);
    tracing::trace!("annotated grid:\n{grid}");

    Ok(largest_contained(&grid, vertices))
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let mut vertices = parse_vertices(input)?;
    let evaluation = solve(&mut vertices)?;

    if let Some((i, j)) = evaluation.corners {
        tracing::info!(
            from = %vertices[i].original,
            to = %vertices[j].original,
            area = %evaluation.area,
            "largest contained rectangle"
        );
    }
    Ok(evaluation.area.to_string())
}
