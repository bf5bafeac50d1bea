//! API route handlers
//!
//! Each submodule handles one endpoint family.

pub mod health;
pub mod hello;
pub mod zips;
