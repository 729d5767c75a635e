//! Command implementations for docauthors CLI

pub mod check;
pub mod completions;
pub mod helpers;
pub mod show;
pub mod version;
