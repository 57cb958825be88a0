// Domain layer: credentials, adapter identity and the factory port.

pub mod model;
pub mod ports;
