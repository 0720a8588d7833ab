// src/core/mod.rs

pub mod convert;
pub mod html;
pub mod sanitize;
pub mod selector;
