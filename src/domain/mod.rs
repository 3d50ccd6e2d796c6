// Domain layer: form values, reference tables and ports. No host or UI dependencies.

pub mod catalog;
pub mod model;
pub mod ports;
