//! Shared helpers for the polymorph JSON crates.

pub mod collections;
