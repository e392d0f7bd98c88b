//! Diagnostics and maintenance commands behind the `drilltool` binary.

pub mod commands;
