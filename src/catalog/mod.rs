//! Species catalog module
//!
//! Static per-discipline species reference tables. The catalog is pure
//! reference data mirroring the federation scoring regulations; it is never
//! mutated at runtime.

mod discipline;
mod species;

pub use discipline::*;
pub use species::*;
