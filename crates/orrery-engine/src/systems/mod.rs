pub mod builder;
pub mod orbit;
pub mod render;
pub mod stepper;
