//! Process exit codes returned by [`crate::run`].

pub const SUCCESS: i32 = 0;

/// Bad arguments, invalid configuration, I/O or engine failures.
pub const ERROR: i32 = 2;

pub const INTERRUPTED: i32 = 130;
