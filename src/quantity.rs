#[macro_use]
mod macros;

pub mod flow;
pub mod volume;
