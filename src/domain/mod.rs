// Domain layer: the quotation form, reference records and the ports the core talks through.

pub mod model;
pub mod ports;
