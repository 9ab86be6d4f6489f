//! Value Objects
//!
//! Immutable types validated on construction.

mod app_path;

pub use app_path::{validate_app_path, AppPath, PathRejection, GIT_DIR};
