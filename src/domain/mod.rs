//! Domain Layer
//!
//! Pure logic for redeploy: no process spawning, no terminal I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Validated values (AppPath)
//! - `services/` - Stateless rules (tool output classification)
//! - `ports/` - Interfaces implemented by the infrastructure layer
//!   (command runner, prompter, workflow event sink)

pub mod ports;
pub mod services;
pub mod value_objects;
