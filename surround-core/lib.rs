//! Text primitives shared by the surround engine.
//!
//! Everything here works on a single line of text addressed by `char`
//! offsets. Line endings are never part of a line.

pub mod chars;
pub mod line;
