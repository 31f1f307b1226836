use chumsky::prelude::*;

use crate::error::PolygonError;
use crate::vertex::{Point, Vertex};

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Point>, extra::Err<Rich<'a, char>>> {
    // Any run of digits, leading zeros included; out-of-range values become a
    // parse error instead of a panic.
    let coord = text::digits(10).to_slice().try_map(|digits: &str, span| {
        digits
            .parse::<i64>()
            .map_err(|e| Rich::custom(span, format!("coordinate {digits} {e}")))
    });

    coord
        .then_ignore(just(','))
        .then(coord)
        .map(|(x, y)| Point::new(x, y))
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// Parses `x,y` lines into vertices, numbered in the order they appear.
#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn parse_vertices(input: &str) -> Result<Vec<Vertex>, PolygonError> {
    let input = input.trim_end();
    let points = parser().parse(input).into_result().map_err(|errors| {
        let (span, reason) = match errors.into_iter().next() {
            Some(err) => (err.span().into_range(), err.reason().to_string()),
            None => (0..input.len(), String::from("unparseable input")),
        };
        PolygonError::Parse {
            src: input.to_string(),
            span: span.into(),
            reason,
        }
    })?;

    let vertices = points
        .into_iter()
        .enumerate()
        .map(|(i, p)| Vertex::new(i, p))
        .collect::<Vec<_>>();
    tracing::debug!(vertices = vertices.len(), "parsed polygon");
    Ok(vertices)
}
