/*
    Error type for the mining crate.

    Invalid caller input fails fast with one of these variants before
    any partial result is built. Errors are never used for control
    flow inside the mining loop.
*/

use std::error;
use std::fmt;
use std::io;

use Error::*;

#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    // An edge endpoint does not name a declared vertex.
    EdgeOutOfRange { u: usize, v: usize, num_nodes: usize },
    // Pattern edges do not form a connected graph over the pattern
    // vertices.
    DisconnectedPattern,
    // A configuration field is outside its allowed range.
    BadConfig(String),
    // The worker pool could not be constructed.
    PoolBuild(String),
    // A graph file could not be read.
    LoadIo(io::Error),
    // A graph file line did not parse as a vertex or edge record.
    LoadParse { line: usize, msg: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeOutOfRange { u, v, num_nodes } => write!(
                f,
                "edge ({}, {}) out of range for {} vertices",
                u, v, num_nodes
            ),
            DisconnectedPattern => {
                write!(f, "pattern edges do not form a connected graph")
            }
            BadConfig(msg) => write!(f, "invalid configuration: {}", msg),
            PoolBuild(msg) => {
                write!(f, "could not build worker pool: {}", msg)
            }
            LoadIo(err) => write!(f, "error reading graph file: {}", err),
            LoadParse { line, msg } => {
                write!(f, "graph file line {}: {}", line, msg)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            LoadIo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        LoadIo(err)
    }
}
