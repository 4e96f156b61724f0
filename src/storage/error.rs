use std::{
    fmt::Display,
    io::{self, ErrorKind},
    num::ParseFloatError,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Reasons a backing file line could not be turned into a [Product](super::Product)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The line did not split into exactly four comma separated fields
    #[error("expected 4 fields, found {found}")]
    FieldCount { found: usize },
    #[error("invalid identifier `{0}`")]
    InvalidId(String),
    #[error("invalid quantity `{0}`")]
    InvalidQuantity(String),
    #[error("invalid price `{0}`")]
    InvalidPrice(String),
}

/// Reasons a price literal was refused
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceError {
    #[error(transparent)]
    Parse(#[from] ParseFloatError),
    #[error("price `{0}` is not a finite number")]
    NotFinite(String),
}

/// File operation that was being attempted when a [PersistError] occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Create,
    Read,
    Write,
}

impl Display for FileAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Write => "write",
        };

        write!(f, "{}", msg)
    }
}

/// Failures while touching the backing file
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("permission denied: cannot {action} `{}`", .path.display())]
    PermissionDenied { path: PathBuf, action: FileAction },
    #[error("cannot {action} `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        action: FileAction,
        #[source]
        source: io::Error,
    },
}

impl PersistError {
    /// Classifies an I/O failure on `path`.
    pub fn from_io(path: &Path, action: FileAction, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            ErrorKind::PermissionDenied => Self::PermissionDenied { path, action },
            _ => Self::Io {
                path,
                action,
                source: err,
            },
        }
    }
}

/// Failed [Inventory](super::Inventory) operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a product with id {0} already exists")]
    Duplicate(i64),
    #[error("product {0} not found")]
    NotFound(i64),
    /// The in-memory change was applied but the backing file could not be rewritten
    #[error("change kept in memory but not saved; {0}")]
    Persist(#[from] PersistError),
}
