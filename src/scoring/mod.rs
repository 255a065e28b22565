//! Scoring sheet module
//!
//! Generation and interactive editing of the per-tournament species scoring
//! list.

mod generator;
mod ident;
mod sheet;


pub use generator::*;
pub use ident::*;
pub use sheet::*;
