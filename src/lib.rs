//! `sear` - Seed-and-Extend Alignment of Reads

pub mod libs;

pub use crate::libs::io::{reader, writer};
