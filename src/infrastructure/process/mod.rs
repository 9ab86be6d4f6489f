//! External process execution

mod shell;

pub use shell::ShellRunner;
