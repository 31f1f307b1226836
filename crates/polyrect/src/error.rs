use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::vertex::Point;

/// Errors that stop the computation before any area is produced.
#[derive(Error, Diagnostic, Debug)]
#[non_exhaustive]
pub enum PolygonError {
    #[error("malformed coordinate line")]
    #[diagnostic(
        code(polyrect::parse),
        help("expected one `x,y` pair of non-negative integers per line")
    )]
    Parse {
        #[source_code]
        src: String,
        #[label("{reason}")]
        span: SourceSpan,
        reason: String,
    },

    #[error("vertices {index} {from} and {next} {to} are not joined by a single axis-aligned edge")]
    #[diagnostic(
        code(polyrect::not_rectilinear),
        help("consecutive lines must share exactly one of x or y, in boundary order")
    )]
    NotRectilinear {
        index: usize,
        next: usize,
        from: Point,
        to: Point,
    },
}
