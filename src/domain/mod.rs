// Domain layer: chassis ID codec, vehicle rules and the API port.
// No HTTP or CLI dependencies here.

pub mod chassis;
pub mod ports;
pub mod vehicle;
