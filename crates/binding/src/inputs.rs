//! The dense named-input set a renderer consumes every frame: `uTime`,
//! `uResolution`, and one entry per preset parameter. Composite entries live
//! in shared cells because their pointer identity is what a render backend
//! keys GPU-side resources on; scalars and booleans are plain copies.
use std::cell::RefCell;
use std::rc::Rc;

/// Built-in uniform carrying elapsed seconds.
pub const TIME_UNIFORM: &str = "uTime";
/// Built-in uniform carrying the viewport size in pixels.
pub const RESOLUTION_UNIFORM: &str = "uResolution";

/// Long-lived mutable two-component container.
pub type Vec2Cell = Rc<RefCell<[f32; 2]>>;
/// Long-lived mutable three-component container.
pub type Vec3Cell = Rc<RefCell<[f32; 3]>>;

/// One named input as the renderer sees it.
#[derive(Debug, Clone)]
pub enum UniformInput {
    Float(f32),
    Bool(bool),
    Vec2(Vec2Cell),
    Color(Vec3Cell),
}

impl UniformInput {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Vec2(_) => "vec2",
            Self::Color(_) => "color",
        }
    }
}

/// The full input set for one preset binding.
#[derive(Debug)]
pub struct FrameInputs {
    time: f32,
    resolution: Vec2Cell,
    params: Vec<(String, UniformInput)>,
}

impl FrameInputs {
    pub(crate) fn new(surface: (u32, u32)) -> Self {
        Self {
            time: 0.0,
            resolution: Rc::new(RefCell::new([surface.0 as f32, surface.1 as f32])),
            params: Vec::new(),
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Current viewport size in pixels.
    pub fn resolution(&self) -> [f32; 2] {
        *self.resolution.borrow()
    }

    /// The resolution container itself; identity is stable between rebuilds.
    pub fn resolution_cell(&self) -> &Vec2Cell {
        &self.resolution
    }

    pub fn get(&self, name: &str) -> Option<&UniformInput> {
        self.params
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, input)| input)
    }

    /// Preset-defined inputs in declaration order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &UniformInput)> {
        self.params
            .iter()
            .map(|(name, input)| (name.as_str(), input))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub(crate) fn set_time(&mut self, seconds: f32) {
        self.time = seconds;
    }

    pub(crate) fn set_resolution(&mut self, width: f32, height: f32) {
        *self.resolution.borrow_mut() = [width, height];
    }

    pub(crate) fn push_param(&mut self, name: &str, input: UniformInput) {
        self.params.push((name.to_string(), input));
    }

    pub(crate) fn params_mut(&mut self) -> std::slice::IterMut<'_, (String, UniformInput)> {
        self.params.iter_mut()
    }
}
