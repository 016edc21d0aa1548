//! Car Selector library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Output format for `--list`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] core::config::ConfigError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the catalog to `out` in the requested format.
pub fn print_catalog(out: &mut impl std::io::Write, format: ListFormat) -> Result<(), Error> {
    let cars = core::catalog::list_car_types();
    match format {
        ListFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, cars)?;
            writeln!(out)?;
        }
        ListFormat::Text => {
            for car in cars {
                writeln!(out, "{}", car.name)?;
                for pro in car.pros {
                    writeln!(out, "  + {pro}")?;
                }
                for con in car.cons {
                    writeln!(out, "  - {con}")?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_catalog_text() {
        let mut out = Vec::new();
        print_catalog(&mut out, ListFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("SUV\n  + Spacious interior\n"));
        assert!(text.contains("Sedan\n  + More fuel efficient\n  + Cheaper\n  - Relatively small\n"));
        // Van's empty placeholder pro is printed, not skipped
        assert!(text.contains("  + Very spacious interior\n  + \n"));
    }

    #[test]
    fn test_print_catalog_json() {
        let mut out = Vec::new();
        print_catalog(&mut out, ListFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let cars = value.as_array().unwrap();
        assert_eq!(cars.len(), 9);
        assert_eq!(cars[1]["name"], "Sedan");
        assert_eq!(cars[1]["image"], "sedan");
        assert_eq!(cars[2]["pros"][1], "");
        assert_eq!(cars[5]["cons"].as_array().unwrap().len(), 1);
    }
}
