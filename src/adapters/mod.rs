// Adapters layer: transport bindings in front of the validator.

pub mod gateway;
