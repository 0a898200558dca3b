/// Serializable plan and layer/effect specs.
pub mod model;
