/// Built-in presets and the name → plan catalog.
pub mod catalog;
