// Domain layer: the Interval value type and the ports (interfaces) the rest of the crate depends on.

pub mod arithmetic;
pub mod interval;
pub mod ordering;
pub mod ports;
