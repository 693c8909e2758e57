// Domain layer: models and ports. Adapters live under config/ and core/lookup.

pub mod model;
pub mod ports;
