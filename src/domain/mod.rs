// Domain layer: records, fixed datasets and ports. No I/O here.

pub mod dataset;
pub mod model;
pub mod ports;
