mod catalog;
mod color;
mod schema;

pub use catalog::{find, presets};
pub use color::{ColorError, HexColor};
pub use schema::{ParamSpec, ParamValue, ParameterSet, Preset, SliderRange, ValueParseError};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Closed set of gallery categories; every preset belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Noise,
    Fractal,
    Geometry,
    Dynamics,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Noise,
        Category::Fractal,
        Category::Geometry,
        Category::Dynamics,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Noise => "Noise",
            Category::Fractal => "Fractal",
            Category::Geometry => "Geometry",
            Category::Dynamics => "Dynamics",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "noise" => Ok(Category::Noise),
            "fractal" => Ok(Category::Fractal),
            "geometry" => Ok(Category::Geometry),
            "dynamics" => Ok(Category::Dynamics),
            other => Err(format!(
                "unknown category '{other}'; expected noise, fractal, geometry, or dynamics"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_categories_case_insensitively() {
        assert_eq!("noise".parse::<Category>().unwrap(), Category::Noise);
        assert_eq!("Fractal".parse::<Category>().unwrap(), Category::Fractal);
        assert!("plasma".parse::<Category>().is_err());
    }

    #[test]
    fn displays_catalog_casing() {
        assert_eq!(Category::Dynamics.to_string(), "Dynamics");
    }
}
