// src/core/error.rs

use std::fmt;
use tokio::sync::mpsc::error::SendError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DevnetError {
    Io(String),
    ParseError(String),
    Validation(String),
    UnknownNetwork(String),
    Crypto(String),
    Channel(String),
}

impl fmt::Display for DevnetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DevnetError::Io(msg) => write!(f, "I/O error: {}", msg),
            DevnetError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            DevnetError::Validation(msg) => write!(f, "Invalid configuration: {}", msg),
            DevnetError::UnknownNetwork(name) => write!(f, "Unknown network: {}", name),
            DevnetError::Crypto(msg) => write!(f, "Key derivation error: {}", msg),
            DevnetError::Channel(msg) => write!(f, "Channel error: {}", msg),
        }
    }
}

impl std::error::Error for DevnetError {}

impl From<std::io::Error> for DevnetError {
    fn from(err: std::io::Error) -> Self {
        DevnetError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DevnetError {
    fn from(err: serde_json::Error) -> Self {
        DevnetError::ParseError(format!("JSON: {}", err))
    }
}

impl From<toml::de::Error> for DevnetError {
    fn from(err: toml::de::Error) -> Self {
        DevnetError::ParseError(format!("TOML: {}", err))
    }
}

impl From<bip39::Error> for DevnetError {
    fn from(err: bip39::Error) -> Self {
        DevnetError::Validation(format!("Mnemonic: {}", err))
    }
}

impl From<hex::FromHexError> for DevnetError {
    fn from(err: hex::FromHexError) -> Self {
        DevnetError::ParseError(format!("Hex: {}", err))
    }
}

impl<T> From<SendError<T>> for DevnetError {
    fn from(err: SendError<T>) -> Self {
        DevnetError::Channel(format!("Tokio send error: {}", err))
    }
}
