// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for the catalog registry

use super::handle::CatalogHandleType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Startup configuration is unusable (missing `connector.name`, unreadable file, ...)
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Catalog name {0} is reserved for internal usage")]
    ReservedCatalogName(String),

    /// Operation is not legal in the registry's current lifecycle state
    #[error("Illegal state: {0}")]
    IllegalState(String),

    #[error("Catalog '{0}' already exists")]
    CatalogAlreadyExists(String),

    #[error("Global system catalog already registered")]
    SystemCatalogAlreadyRegistered,

    #[error("No catalog '{0}'")]
    CatalogNotFound(String),

    #[error("Catalog '{catalog}' has no connector for handle type {handle_type}")]
    HandleTypeNotFound {
        catalog: String,
        handle_type: CatalogHandleType,
    },

    #[error("No connector factory for connector '{0}'")]
    ConnectorNotFound(String),

    #[error("Connector factory '{0}' is already registered")]
    ConnectorAlreadyExists(String),

    /// Failure raised by a connector or connector factory
    #[error("Connector failed for catalog '{catalog}': {message}")]
    ConnectorFailed { catalog: String, message: String },

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl CatalogError {
    /// Configuration errors abort startup; everything else is reported to the caller
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            CatalogError::Configuration(_)
                | CatalogError::ReservedCatalogName(_)
                | CatalogError::SystemCatalogAlreadyRegistered
        )
    }

    /// Name-uniqueness violations
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            CatalogError::CatalogAlreadyExists(_) | CatalogError::SystemCatalogAlreadyRegistered
        )
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::IoError(err.to_string())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CatalogError::CatalogAlreadyExists("c".to_string()).to_string(),
            "Catalog 'c' already exists"
        );
        assert_eq!(
            CatalogError::CatalogNotFound("missing".to_string()).to_string(),
            "No catalog 'missing'"
        );
        assert_eq!(
            CatalogError::ReservedCatalogName("system".to_string()).to_string(),
            "Catalog name system is reserved for internal usage"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(CatalogError::SystemCatalogAlreadyRegistered.is_conflict());
        assert!(CatalogError::SystemCatalogAlreadyRegistered.is_configuration_error());
        assert!(CatalogError::CatalogAlreadyExists("a".to_string()).is_conflict());
        assert!(!CatalogError::IllegalState("stopped".to_string()).is_conflict());
        assert!(CatalogError::Configuration("bad".to_string()).is_configuration_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CatalogError = io.into();
        assert!(matches!(err, CatalogError::IoError(msg) if msg.contains("gone")));
    }
}
