//! Delimiter pair engine: find the pair around a cursor, then remove,
//! change, or insert it.

pub mod buffer;
pub mod command;
pub mod matcher;
pub mod messages;
pub mod pair;
pub mod position;
pub mod surrounding;
pub mod wrap;
