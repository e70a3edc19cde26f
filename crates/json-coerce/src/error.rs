use std::str::Utf8Error;

use thiserror::Error;

/// The one fault this crate surfaces with a cause attached.
///
/// Every shape or conversion failure collapses into an absent result; a
/// parse failure in the raw-text entry points signals corrupted input
/// instead, so it keeps its detail.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed json text: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("json text is not valid utf-8: {0}")]
    Encoding(#[from] Utf8Error),
}
