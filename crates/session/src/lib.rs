mod controls;
mod export;
mod session;
mod store;

pub use controls::{
    color_change, control_for, controls_for, format_value, slider_change, toggle_change, Control,
    ControlKind, ParamChange, SLIDER_DECIMALS,
};
pub use export::{escape_template_literal, react_component};
pub use session::Session;
pub use store::ParameterStore;
