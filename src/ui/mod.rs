//! Terminal output for the binary
//!
//! The library reports through `WorkflowEvent`s and errors; everything
//! the user sees is rendered here.

pub mod console;
pub mod context;
pub mod error;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
