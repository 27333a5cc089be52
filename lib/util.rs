mod assume;
mod integer;

pub use assume::*;
pub use integer::*;
