//! Defines the parameter schema shared by the preset catalog and every
//! consumer of it: the session store copies defaults out of it, the control
//! layer derives widgets from it, and the render binding converts its values
//! into per-frame uniform inputs.
//!
//! Types:
//!
//! - `ParamValue` is the closed set of value shapes a preset parameter can
//!   take, matched exhaustively wherever values are consumed.
//! - `ParamSpec` pairs a display label with a default value and, for scalar
//!   parameters, a slider range.
//! - `ParameterSet` keeps descriptors in declaration order (significant for
//!   display) while offering name lookup.
//! - `Preset` bundles identity, category, opaque shader source, and the
//!   parameter set.
//!
//! Functions:
//!
//! - `Preset::validate` returns human-readable issues so catalog tests can
//!   surface authoring mistakes without panicking.
//! - `ParamSpec::parse_value` turns CLI-style text into a value of the
//!   descriptor's kind.
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::color::{ColorError, HexColor};
use crate::Category;

/// Current or default value of one preset parameter.
///
/// The original sources for these presets carry values as untyped
/// `type`-tagged blobs; here the tag and the payload are one variant, so a
/// value of the wrong shape cannot be constructed in the first place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Scalar(f64),
    Vector2([f64; 2]),
    Color(HexColor),
    Boolean(bool),
}

impl ParamValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Vector2(_) => "vector2",
            Self::Color(_) => "color",
            Self::Boolean(_) => "boolean",
        }
    }

    /// Whether `other` carries the same value shape as `self`.
    pub fn same_kind(&self, other: &ParamValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Slider bounds for scalar parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Static metadata for one parameter: label, default, and (for scalars) the
/// slider range. Independent of any live value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamSpec {
    pub label: String,
    pub default: ParamValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<SliderRange>,
}

impl ParamSpec {
    pub fn scalar(label: &str, default: f64, min: f64, max: f64, step: f64) -> Self {
        Self {
            label: label.to_string(),
            default: ParamValue::Scalar(default),
            range: Some(SliderRange { min, max, step }),
        }
    }

    pub fn color(label: &str, default: HexColor) -> Self {
        Self {
            label: label.to_string(),
            default: ParamValue::Color(default),
            range: None,
        }
    }

    pub fn vec2(label: &str, x: f64, y: f64) -> Self {
        Self {
            label: label.to_string(),
            default: ParamValue::Vector2([x, y]),
            range: None,
        }
    }

    pub fn boolean(label: &str, default: bool) -> Self {
        Self {
            label: label.to_string(),
            default: ParamValue::Boolean(default),
            range: None,
        }
    }

    /// Parses `raw` into a value of this descriptor's kind.
    ///
    /// Accepted syntax per kind: a decimal literal for scalars, `x,y` for
    /// two-component vectors, `#rrggbb` for colors, and
    /// `true`/`false`/`on`/`off`/`1`/`0` for booleans.
    pub fn parse_value(&self, raw: &str) -> Result<ParamValue, ValueParseError> {
        let trimmed = raw.trim();
        match &self.default {
            ParamValue::Scalar(_) => {
                let value: f64 = trimmed
                    .parse()
                    .map_err(|_| ValueParseError::InvalidScalar(trimmed.to_string()))?;
                if !value.is_finite() {
                    return Err(ValueParseError::InvalidScalar(trimmed.to_string()));
                }
                Ok(ParamValue::Scalar(value))
            }
            ParamValue::Vector2(_) => {
                let (x, y) = trimmed
                    .split_once(',')
                    .ok_or_else(|| ValueParseError::InvalidPair(trimmed.to_string()))?;
                let x: f64 = x
                    .trim()
                    .parse()
                    .map_err(|_| ValueParseError::InvalidPair(trimmed.to_string()))?;
                let y: f64 = y
                    .trim()
                    .parse()
                    .map_err(|_| ValueParseError::InvalidPair(trimmed.to_string()))?;
                if !x.is_finite() || !y.is_finite() {
                    return Err(ValueParseError::InvalidPair(trimmed.to_string()));
                }
                Ok(ParamValue::Vector2([x, y]))
            }
            ParamValue::Color(_) => Ok(ParamValue::Color(HexColor::parse(trimmed)?)),
            ParamValue::Boolean(_) => match trimmed.to_ascii_lowercase().as_str() {
                "true" | "on" | "1" => Ok(ParamValue::Boolean(true)),
                "false" | "off" | "0" => Ok(ParamValue::Boolean(false)),
                _ => Err(ValueParseError::InvalidBoolean(trimmed.to_string())),
            },
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueParseError {
    #[error("'{0}' is not a finite number")]
    InvalidScalar(String),

    #[error("'{0}' is not an x,y pair of finite numbers")]
    InvalidPair(String),

    #[error("'{0}' is not a boolean (expected true/false, on/off, or 1/0)")]
    InvalidBoolean(String),

    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Ordered uniform-name → descriptor table for one preset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    entries: Vec<(String, ParamSpec)>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, spec: ParamSpec) {
        self.entries.push((name.to_string(), spec));
    }

    pub fn get(&self, name: &str) -> Option<&ParamSpec> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, spec)| spec)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamSpec)> {
        self.entries
            .iter()
            .map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ParameterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, spec) in &self.entries {
            map.serialize_entry(name, spec)?;
        }
        map.end()
    }
}

/// A named, self-contained visual effect: opaque fragment-shader text plus the
/// adjustable parameter schema that drives it.
#[derive(Debug, Clone, Serialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    #[serde(skip)]
    pub shader_source: String,
    pub parameters: ParameterSet,
}

impl Preset {
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        category: Category,
        shader_source: String,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category,
            shader_source,
            parameters: ParameterSet::new(),
        }
    }

    pub fn parameter(mut self, name: &str, spec: ParamSpec) -> Self {
        self.parameters.insert(name, spec);
        self
    }

    /// Reports authoring mistakes as human-readable issues instead of
    /// panicking; the catalog tests assert the list is empty for every
    /// built-in preset.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.id.trim().is_empty() {
            issues.push("preset id must not be empty".to_string());
        }
        if self.name.trim().is_empty() {
            issues.push(format!("preset '{}' has an empty name", self.id));
        }
        if self.shader_source.trim().is_empty() {
            issues.push(format!("preset '{}' has empty shader source", self.id));
        }

        let mut seen = Vec::new();
        for (name, spec) in self.parameters.iter() {
            if seen.contains(&name) {
                issues.push(format!(
                    "preset '{}' declares parameter '{}' twice",
                    self.id, name
                ));
            }
            seen.push(name);

            match (&spec.default, &spec.range) {
                (ParamValue::Scalar(default), Some(range)) => {
                    if range.step <= 0.0 {
                        issues.push(format!(
                            "parameter '{}' of '{}' has non-positive step {}",
                            name, self.id, range.step
                        ));
                    }
                    if range.min > range.max {
                        issues.push(format!(
                            "parameter '{}' of '{}' has min {} above max {}",
                            name, self.id, range.min, range.max
                        ));
                    }
                    if *default < range.min || *default > range.max {
                        issues.push(format!(
                            "parameter '{}' of '{}' defaults to {} outside [{}, {}]",
                            name, self.id, default, range.min, range.max
                        ));
                    }
                }
                (ParamValue::Scalar(_), None) => {
                    issues.push(format!(
                        "scalar parameter '{}' of '{}' is missing its slider range",
                        name, self.id
                    ));
                }
                (_, Some(_)) => {
                    issues.push(format!(
                        "parameter '{}' of '{}' is {} but carries a slider range",
                        name,
                        self.id,
                        spec.default.kind_name()
                    ));
                }
                (_, None) => {}
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_preset() -> Preset {
        Preset::new(
            "demo",
            "Demo",
            "A demo preset.",
            Category::Noise,
            "uniform float uScale;\nvoid main() {}".to_string(),
        )
        .parameter("uScale", ParamSpec::scalar("Scale", 6.0, 1.0, 20.0, 0.1))
        .parameter(
            "uColorA",
            ParamSpec::color("Tint", HexColor::from_rgb(0x00, 0x2b, 0x5b)),
        )
    }

    #[test]
    fn valid_preset_reports_no_issues() {
        assert!(demo_preset().validate().is_empty());
    }

    #[test]
    fn detects_default_outside_range() {
        let preset = Preset::new(
            "bad",
            "Bad",
            "",
            Category::Noise,
            "void main() {}".to_string(),
        )
        .parameter("uScale", ParamSpec::scalar("Scale", 42.0, 1.0, 20.0, 0.1));
        let issues = preset.validate();
        assert!(issues.iter().any(|issue| issue.contains("outside")));
    }

    #[test]
    fn detects_range_on_non_scalar() {
        let mut spec = ParamSpec::boolean("Flag", true);
        spec.range = Some(SliderRange {
            min: 0.0,
            max: 1.0,
            step: 0.1,
        });
        let preset = Preset::new(
            "bad",
            "Bad",
            "",
            Category::Noise,
            "void main() {}".to_string(),
        )
        .parameter("uFlag", spec);
        let issues = preset.validate();
        assert!(issues.iter().any(|issue| issue.contains("slider range")));
    }

    #[test]
    fn parameter_order_is_declaration_order() {
        let preset = demo_preset();
        let names: Vec<&str> = preset.parameters.names().collect();
        assert_eq!(names, vec!["uScale", "uColorA"]);
    }

    #[test]
    fn parses_values_by_descriptor_kind() {
        let scalar = ParamSpec::scalar("Scale", 6.0, 1.0, 20.0, 0.1);
        assert_eq!(
            scalar.parse_value("12.5").unwrap(),
            ParamValue::Scalar(12.5)
        );
        assert!(scalar.parse_value("NaN").is_err());
        assert!(scalar.parse_value("twelve").is_err());

        let pair = ParamSpec::vec2("Center", -0.745, 0.1);
        assert_eq!(
            pair.parse_value("-0.5, 0.25").unwrap(),
            ParamValue::Vector2([-0.5, 0.25])
        );
        assert!(pair.parse_value("0.5").is_err());

        let color = ParamSpec::color("Tint", HexColor::from_rgb(0, 0, 0));
        assert_eq!(
            color.parse_value("#FF6600").unwrap(),
            ParamValue::Color(HexColor::from_rgb(0xff, 0x66, 0x00))
        );

        let flag = ParamSpec::boolean("Flag", false);
        assert_eq!(flag.parse_value("on").unwrap(), ParamValue::Boolean(true));
        assert_eq!(flag.parse_value("0").unwrap(), ParamValue::Boolean(false));
        assert!(flag.parse_value("maybe").is_err());
    }

    #[test]
    fn serializes_parameters_as_ordered_map() {
        let json = serde_json::to_value(&demo_preset()).unwrap();
        assert_eq!(json["parameters"]["uScale"]["default"], 6.0);
        assert_eq!(json["parameters"]["uColorA"]["default"], "#002b5b");
        assert!(json.get("shader_source").is_none());
    }
}
