use std::io::Read;

use miette::*;

/// Reads the polygon from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("reading {path}")),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .into_diagnostic()
                .wrap_err("reading stdin")?;
            Ok(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::contained;

    #[test]
    fn it_works() -> Result<()> {
        let path = std::env::temp_dir().join(format!("polyrect-input-{}.txt", std::process::id()));
        std::fs::write(&path, "0,0\n0,3\n5,3\n5,0\n").into_diagnostic()?;

        let input = read_input(path.to_str());
        std::fs::remove_file(&path).into_diagnostic()?;

        assert_eq!("24", contained::process(&input?)?);
        Ok(())
    }

    #[test]
    fn missing_file_names_the_path() {
        let report = read_input(Some("/nonexistent/polyrect/polygon.txt")).unwrap_err();
        assert!(report.to_string().contains("/nonexistent/polyrect/polygon.txt"));
    }
}
