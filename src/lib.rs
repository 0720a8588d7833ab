// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod annotate;
pub mod cli;
pub mod core;
pub mod page;
pub mod params;
