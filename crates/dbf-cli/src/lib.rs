//! Library side of the `dbf` command line tool.

pub mod info;
pub mod logging;
pub mod output;
