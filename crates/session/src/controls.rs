//! Derives interactive controls from parameter descriptors and packages the
//! change events they emit. Pure derivation: the only output besides the
//! control description is a `(name, value)` event for the store.
use library::{ColorError, HexColor, ParamSpec, ParamValue, Preset, SliderRange};
use serde::Serialize;
use tracing::warn;

/// Decimal places used when displaying slider values.
pub const SLIDER_DECIMALS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlKind {
    /// Continuous slider bounded and quantized by the descriptor range.
    Slider(SliderRange),
    /// Picker emitting canonical `#rrggbb` strings.
    ColorPicker,
    /// Binary toggle emitting the negation of the current value.
    Toggle,
    /// Non-interactive display of a driver-set value pair.
    Readout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Control {
    pub name: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: ControlKind,
}

impl Control {
    pub fn is_interactive(&self) -> bool {
        !matches!(self.kind, ControlKind::Readout)
    }
}

/// A single edit flowing from a control back into the parameter store.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamChange {
    pub name: String,
    pub value: ParamValue,
}

pub fn control_for(name: &str, spec: &ParamSpec) -> Control {
    let kind = match &spec.default {
        ParamValue::Scalar(_) => {
            let range = spec.range.unwrap_or_else(|| {
                warn!(
                    parameter = name,
                    "scalar parameter has no slider range; presenting a unit slider"
                );
                SliderRange {
                    min: 0.0,
                    max: 1.0,
                    step: 0.01,
                }
            });
            ControlKind::Slider(range)
        }
        ParamValue::Color(_) => ControlKind::ColorPicker,
        ParamValue::Boolean(_) => ControlKind::Toggle,
        ParamValue::Vector2(_) => ControlKind::Readout,
    };
    Control {
        name: name.to_string(),
        label: spec.label.clone(),
        kind,
    }
}

/// Controls for every parameter of `preset`, in declaration order.
pub fn controls_for(preset: &Preset) -> Vec<Control> {
    preset
        .parameters
        .iter()
        .map(|(name, spec)| control_for(name, spec))
        .collect()
}

/// Display string for a current value; slider readouts use two decimals.
pub fn format_value(value: &ParamValue) -> String {
    match value {
        ParamValue::Scalar(v) => format!("{v:.precision$}", precision = SLIDER_DECIMALS),
        ParamValue::Vector2([x, y]) => format!("{x}, {y}"),
        ParamValue::Color(color) => color.to_string(),
        ParamValue::Boolean(flag) => flag.to_string(),
    }
}

pub fn slider_change(name: &str, value: f64) -> ParamChange {
    ParamChange {
        name: name.to_string(),
        value: ParamValue::Scalar(value),
    }
}

pub fn color_change(name: &str, hex: &str) -> Result<ParamChange, ColorError> {
    Ok(ParamChange {
        name: name.to_string(),
        value: ParamValue::Color(HexColor::parse(hex)?),
    })
}

/// Toggle activation emits the logical negation of the current value.
pub fn toggle_change(name: &str, current: bool) -> ParamChange {
    ParamChange {
        name: name.to_string(),
        value: ParamValue::Boolean(!current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_descriptor_becomes_a_bounded_slider() {
        let spec = ParamSpec::scalar("Cell Density", 6.0, 1.0, 20.0, 0.1);
        let control = control_for("uScale", &spec);
        assert_eq!(control.label, "Cell Density");
        assert!(control.is_interactive());
        match control.kind {
            ControlKind::Slider(range) => {
                assert_eq!(range.min, 1.0);
                assert_eq!(range.max, 20.0);
                assert_eq!(range.step, 0.1);
            }
            other => panic!("expected slider, got {other:?}"),
        }
    }

    #[test]
    fn color_boolean_and_pair_map_to_their_controls() {
        let color = control_for(
            "uTint",
            &ParamSpec::color("Tint", HexColor::from_rgb(0, 0, 0)),
        );
        assert_eq!(color.kind, ControlKind::ColorPicker);

        let toggle = control_for("uInvert", &ParamSpec::boolean("Invert", false));
        assert_eq!(toggle.kind, ControlKind::Toggle);

        let readout = control_for("uCenter", &ParamSpec::vec2("Coordinates", -0.745, 0.1));
        assert_eq!(readout.kind, ControlKind::Readout);
        assert!(!readout.is_interactive());
    }

    #[test]
    fn toggle_emits_the_negation() {
        let change = toggle_change("uInvert", true);
        assert_eq!(change.value, ParamValue::Boolean(false));
        let change = toggle_change("uInvert", false);
        assert_eq!(change.value, ParamValue::Boolean(true));
    }

    #[test]
    fn color_change_normalizes_to_canonical_form() {
        let change = color_change("uTint", "#FF6600").unwrap();
        assert_eq!(
            change.value,
            ParamValue::Color(HexColor::from_rgb(0xff, 0x66, 0x00))
        );
        assert!(color_change("uTint", "ff6600").is_err());
    }

    #[test]
    fn slider_readout_uses_two_decimals() {
        assert_eq!(format_value(&ParamValue::Scalar(12.5)), "12.50");
        assert_eq!(format_value(&ParamValue::Scalar(6.0)), "6.00");
        assert_eq!(
            format_value(&ParamValue::Color(HexColor::from_rgb(0, 0x2b, 0x5b))),
            "#002b5b"
        );
    }
}
