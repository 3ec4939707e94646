// Errores del crate. Todo fallo de lectura del archivo .dom es fatal y se
// propaga al llamador; no hay recuperación parcial de registros.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("cannot read dom file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read error at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("dom file is empty (missing header line)")]
    MissingHeader,

    #[error("invalid header at line 1: {0}")]
    InvalidHeader(String),

    #[error("dom file truncated: header declares {expected} dominoes, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Valida que una cota de surplus sea un número en [0, 1].
pub fn check_unit_bound(name: &str, value: f64) -> Result<(), DomError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(DomError::InvalidArgument(format!(
            "{} must be within [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}
