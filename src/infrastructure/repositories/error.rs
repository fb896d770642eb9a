use std::{io, path::Path};

use crate::domain::errors::DomainError;

pub fn map_io(path: &Path, err: &io::Error) -> DomainError {
    match err.kind() {
        io::ErrorKind::NotFound => {
            DomainError::Persistence(format!("seed file not found: {}", path.display()))
        }
        _ => DomainError::Persistence(format!("cannot read {}: {err}", path.display())),
    }
}

pub fn map_json(path: &Path, err: &serde_json::Error) -> DomainError {
    DomainError::Persistence(format!(
        "malformed seed file {} at line {}, column {}: {err}",
        path.display(),
        err.line(),
        err.column()
    ))
}

pub fn lock_poisoned() -> DomainError {
    DomainError::Persistence("record store lock poisoned".into())
}
