//! Error types for BioQA.
//!
//! Resource-load failures (`ModelLoad`) are fatal at engine construction;
//! `Inference` is a per-request failure and must never be silently turned
//! into a fallback response.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Model load error: {0}")]
    ModelLoad(String),

    #[error("Tokenization error: {0}")]
    Tokenize(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
