//! Error types for regman
//!
//! 레지스트리/매니저에서 발생하는 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// regman 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 레지스트리 (키 단위)
    // ========================================================================
    #[error("{registry}: '{key}' already registered.")]
    DuplicateKey { registry: String, key: String },

    #[error("{registry}: '{key}' not found.")]
    KeyNotFound { registry: String, key: String },

    #[error("{registry}: '{key}' is not a {expected}")]
    TypeMismatch {
        registry: String,
        key: String,
        expected: &'static str,
    },

    // ========================================================================
    // 매니저 (레지스트리 단위)
    // ========================================================================
    #[error("Registry '{0}' already exists.")]
    DuplicateRegistry(String),

    #[error("Registry '{0}' not found.")]
    RegistryNotFound(String),

    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// 중복 키 에러 생성 헬퍼
    pub fn duplicate_key(registry: impl Into<String>, key: impl Into<String>) -> Self {
        Error::DuplicateKey {
            registry: registry.into(),
            key: key.into(),
        }
    }

    /// 키 없음 에러 생성 헬퍼
    pub fn key_not_found(registry: impl Into<String>, key: impl Into<String>) -> Self {
        Error::KeyNotFound {
            registry: registry.into(),
            key: key.into(),
        }
    }

    /// 찾는 대상(키 또는 레지스트리)이 없는 에러인지 확인
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound { .. } | Error::RegistryNotFound(_))
    }

    /// 이미 존재하는 대상에 대한 에러인지 확인
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Error::DuplicateKey { .. } | Error::DuplicateRegistry(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::duplicate_key("test_registry", "duplicate_key");
        assert_eq!(
            err.to_string(),
            "test_registry: 'duplicate_key' already registered."
        );

        let err = Error::DuplicateRegistry("duplicate_name".into());
        assert_eq!(err.to_string(), "Registry 'duplicate_name' already exists.");

        let err = Error::RegistryNotFound("missing".into());
        assert_eq!(err.to_string(), "Registry 'missing' not found.");
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::key_not_found("r", "k").is_not_found());
        assert!(Error::RegistryNotFound("r".into()).is_not_found());
        assert!(!Error::DuplicateRegistry("r".into()).is_not_found());

        assert!(Error::duplicate_key("r", "k").is_duplicate());
        assert!(Error::DuplicateRegistry("r".into()).is_duplicate());
        assert!(!Error::Config("bad".into()).is_duplicate());
    }
}
