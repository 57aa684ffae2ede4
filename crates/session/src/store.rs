use library::{ParamSpec, ParamValue, Preset};
use tracing::warn;

/// Live values for every parameter of the active preset.
///
/// The table's domain is always exactly the active preset's parameter-name
/// set: `reset` swaps the whole table in a single assignment, so no caller
/// ever observes a half-populated store, and nothing else adds or removes
/// entries.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    preset_id: String,
    values: Vec<(String, ParamValue)>,
}

impl ParameterStore {
    pub fn for_preset(preset: &Preset) -> Self {
        let mut store = Self {
            preset_id: String::new(),
            values: Vec::new(),
        };
        store.reset(preset);
        store
    }

    /// Discards all current values and repopulates from descriptor defaults.
    pub fn reset(&mut self, preset: &Preset) {
        self.preset_id = preset.id.clone();
        self.values = preset
            .parameters
            .iter()
            .map(|(name, spec)| (name.to_string(), spec.default.clone()))
            .collect();
    }

    /// Overwrites the value for `name`.
    ///
    /// An unknown name or a value of the wrong shape means the schema and the
    /// store have drifted apart; both are logged and ignored rather than
    /// propagated toward the renderer. Returns whether the write landed.
    pub fn set(&mut self, name: &str, value: ParamValue) -> bool {
        let Some((_, slot)) = self
            .values
            .iter_mut()
            .find(|(entry_name, _)| entry_name == name)
        else {
            warn!(
                preset = %self.preset_id,
                parameter = name,
                "set for a parameter the active preset does not declare"
            );
            return false;
        };

        if !slot.same_kind(&value) {
            warn!(
                preset = %self.preset_id,
                parameter = name,
                expected = slot.kind_name(),
                got = value.kind_name(),
                "set with a value of the wrong shape"
            );
            return false;
        }

        *slot = value;
        true
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, value)| value)
    }

    /// Current value, falling back to the descriptor default.
    ///
    /// After a completed `reset` the fallback can only fire on a
    /// schema/store desynchronization, so it is logged.
    pub fn value_or_default<'a>(&'a self, name: &str, spec: &'a ParamSpec) -> &'a ParamValue {
        match self.get(name) {
            Some(value) => value,
            None => {
                warn!(
                    preset = %self.preset_id,
                    parameter = name,
                    "falling back to descriptor default for a missing parameter"
                );
                &spec.default
            }
        }
    }

    /// Id of the preset this store was last reset to.
    pub fn preset_id(&self) -> &str {
        &self.preset_id
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
