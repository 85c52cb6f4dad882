//! Error types for the location store and the chat commands.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::location::Axis;

/// Failures while reading or writing the store file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode locations: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("could not encode location {name}: coordinates must be finite")]
    NonFinite { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Location not found!")]
pub struct NotFound {
    pub name: String,
}

/// Problems with a recognized command. The display text is sent back to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Invalid argument count, need {expected} but got {got}")]
    ArgumentCount { expected: usize, got: usize },

    #[error("{axis} coordinate is not a number")]
    NumberFormat { axis: Axis },

    #[error("Couldn't delete because: {0}")]
    NotFound(#[from] NotFound),
}
