use library::{ParamValue, Preset};
use tracing::debug;

use crate::controls::{controls_for, Control, ParamChange};
use crate::export::react_component;
use crate::store::ParameterStore;

/// The UI layer's handle on the active preset: owns the one mutable piece of
/// domain state (the parameter store) and wires control events, the render
/// binding's reads, and the exporter to it.
#[derive(Debug)]
pub struct Session<'catalog> {
    preset: &'catalog Preset,
    store: ParameterStore,
}

impl<'catalog> Session<'catalog> {
    pub fn new(preset: &'catalog Preset) -> Self {
        Self {
            preset,
            store: ParameterStore::for_preset(preset),
        }
    }

    pub fn preset(&self) -> &'catalog Preset {
        self.preset
    }

    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    /// Switches the active preset, discarding all edits.
    ///
    /// Re-selecting the preset that is already active keeps the current
    /// values, matching a gallery click on the highlighted entry.
    pub fn select(&mut self, preset: &'catalog Preset) {
        if preset.id == self.preset.id {
            debug!(preset = %preset.id, "preset already active; keeping edits");
            return;
        }
        debug!(from = %self.preset.id, to = %preset.id, "switching preset");
        self.preset = preset;
        self.store.reset(preset);
    }

    /// Applies a control change event; returns whether the store accepted it.
    pub fn apply(&mut self, change: ParamChange) -> bool {
        self.store.set(&change.name, change.value)
    }

    pub fn value_of(&self, name: &str) -> Option<&ParamValue> {
        self.store.get(name)
    }

    /// Controls for the active preset, in declaration order.
    pub fn controls(&self) -> Vec<Control> {
        controls_for(self.preset)
    }

    /// Standalone component source reproducing the current visual state.
    pub fn export(&self) -> String {
        react_component(self.preset, &self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::slider_change;
    use library::{find, ParamValue};

    #[test]
    fn edit_then_switch_and_back_restores_defaults() {
        let first = find("worley-caustics").expect("catalog preset");
        let second = find("mandelbrot-explorer").expect("catalog preset");

        let mut session = Session::new(first);
        assert_eq!(session.value_of("uScale"), Some(&ParamValue::Scalar(6.0)));

        assert!(session.apply(slider_change("uScale", 12.5)));
        assert_eq!(session.value_of("uScale"), Some(&ParamValue::Scalar(12.5)));

        session.select(second);
        assert!(session.value_of("uScale").is_none());
        assert_eq!(session.value_of("uZoom"), Some(&ParamValue::Scalar(1.0)));

        session.select(first);
        assert_eq!(session.value_of("uScale"), Some(&ParamValue::Scalar(6.0)));
    }

    #[test]
    fn reselecting_the_active_preset_keeps_edits() {
        let preset = find("worley-caustics").expect("catalog preset");
        let mut session = Session::new(preset);
        session.apply(slider_change("uScale", 12.5));

        session.select(preset);
        assert_eq!(session.value_of("uScale"), Some(&ParamValue::Scalar(12.5)));
    }

    #[test]
    fn export_reflects_current_edits() {
        let preset = find("worley-caustics").expect("catalog preset");
        let mut session = Session::new(preset);
        session.apply(slider_change("uScale", 12.5));

        let code = session.export();
        assert!(code.contains("uScale: { value: 12.5 },"));
        assert!(code.contains("new THREE.Color('#002b5b')"));
    }

    #[test]
    fn controls_follow_declaration_order() {
        let preset = find("worley-caustics").expect("catalog preset");
        let session = Session::new(preset);
        let names: Vec<String> = session
            .controls()
            .into_iter()
            .map(|control| control.name)
            .collect();
        assert_eq!(names, vec!["uScale", "uSpeed", "uColorA", "uColorB"]);
    }
}
