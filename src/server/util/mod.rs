//! Small helpers shared by the server layers.

pub mod join;
pub mod parse;
