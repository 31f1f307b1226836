use miette::*;
use rayon::prelude::*;

use crate::parser::parse_vertices;
use crate::vertex::{inclusive_area, Area, Vertex};

/// Largest bounding box of any two vertices, ignoring the polygon entirely.
/// Always an upper bound for [`crate::evaluate::largest_contained`].
pub fn largest_bounding(vertices: &[Vertex]) -> Area {
    vertices
        .par_iter()
        .enumerate()
        .map(|(i, a)| {
            vertices
                .iter()
                .skip(i + 1)
                .map(|b| inclusive_area(a.original, b.original))
                .max()
                .unwrap_or(0)
        })
        .max()
        .unwrap_or(0)
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let vertices = parse_vertices(input)?;
    Ok(largest_bounding(&vertices).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn it_works() -> Result<()> {
        let input = "7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3";
        assert_eq!("50", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case::empty("", "0")]
    #[case::single("3,4", "0")]
    #[case::rectangle("0,0\n0,3\n5,3\n5,0", "24")]
    #[case::l_shape("0,0\n4,0\n4,2\n2,2\n2,4\n0,4", "25")]
    fn bounding_box_of_all_pairs(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn ignores_boundary_order() -> Result<()> {
        // Not a valid boundary, but the baseline never looks at edges.
        assert_eq!("12", process("0,0\n3,2\n1,1")?);
        Ok(())
    }
}
