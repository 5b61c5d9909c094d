// Adapters layer: implementations of the domain ports that talk to the outside world.

pub mod reference;
