//! Plumbing shared by the binaries in this workspace: logging and reading/writing files.

#[macro_use]
extern crate log;

pub mod logger;

mod io;

pub use crate::io::{read_json, slurp_file, write_file};
