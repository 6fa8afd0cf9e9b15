//! Settings - 레지스트리/매니저 공통 설정
//!
//! TOML 파일에서 로드합니다. 모든 필드는 생략 가능하며 기본값으로 채워집니다.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 기본 설정 파일명
pub const REGMAN_CONFIG_FILE: &str = "regman.toml";

/// 레지스트리 맵의 기본 초기 용량
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// 초기 용량 상한 - 이보다 큰 값은 설정 로드 시 거부됨
pub const MAX_INITIAL_CAPACITY: usize = 1 << 16;

/// regman 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegmanConfig {
    /// 매니저 생성 시 미리 만들어 둘 레지스트리 이름
    pub preload: Vec<String>,

    /// 레지스트리당 초기 용량
    pub initial_capacity: usize,

    /// 덮어쓰기 발생 시 info 로그 출력
    pub log_overwrites: bool,
}

impl Default for RegmanConfig {
    fn default() -> Self {
        Self {
            preload: Vec::new(),
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            log_overwrites: true,
        }
    }
}

impl RegmanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 프리로드할 레지스트리 추가
    pub fn with_preload(mut self, name: impl Into<String>) -> Self {
        self.preload.push(name.into());
        self
    }

    /// 초기 용량 설정
    ///
    /// 상한 검사는 하지 않습니다. 레지스트리 생성 시 `MAX_INITIAL_CAPACITY`로 제한됩니다.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// 덮어쓰기 로그 설정
    pub fn with_log_overwrites(mut self, enabled: bool) -> Self {
        self.log_overwrites = enabled;
        self
    }

    // ========================================================================
    // Load / Save
    // ========================================================================

    /// 설정값 검증
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(Error::Config(format!(
                "initial_capacity {} exceeds maximum {}",
                self.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }
        Ok(())
    }

    /// TOML 문자열 파싱
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 파일 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 파일 로드 (파일이 없으면 기본값)
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// TOML 직렬화
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RegmanConfig::default();
        assert!(config.preload.is_empty());
        assert_eq!(config.initial_capacity, DEFAULT_INITIAL_CAPACITY);
        assert!(config.log_overwrites);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = RegmanConfig::from_toml_str(r#"preload = ["plugins", "strategies"]"#).unwrap();
        assert_eq!(config.preload, vec!["plugins", "strategies"]);
        assert_eq!(config.initial_capacity, DEFAULT_INITIAL_CAPACITY);
        assert!(config.log_overwrites);
    }

    #[test]
    fn test_invalid_toml() {
        let err = RegmanConfig::from_toml_str("initial_capacity = \"lots\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_oversized_initial_capacity_rejected() {
        let err = RegmanConfig::from_toml_str("initial_capacity = 9223372036854775807")
            .unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("initial_capacity")));

        let at_limit = format!("initial_capacity = {}", MAX_INITIAL_CAPACITY);
        let config = RegmanConfig::from_toml_str(&at_limit).unwrap();
        assert_eq!(config.initial_capacity, MAX_INITIAL_CAPACITY);
    }

    #[test]
    fn test_load_rejects_oversized_initial_capacity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(REGMAN_CONFIG_FILE);
        let content = format!("initial_capacity = {}", MAX_INITIAL_CAPACITY + 1);
        std::fs::write(&path, content).unwrap();

        assert!(matches!(RegmanConfig::load(&path), Err(Error::Config(_))));
        // load_or_default는 경고 후 기본값
        assert_eq!(RegmanConfig::load_or_default(&path), RegmanConfig::default());
    }

    #[test]
    fn test_load_and_save_roundtrip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(REGMAN_CONFIG_FILE);

        let config = RegmanConfig::new()
            .with_preload("plugins")
            .with_initial_capacity(64)
            .with_log_overwrites(false);
        std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();

        assert_eq!(RegmanConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = RegmanConfig::load_or_default(dir.path().join("missing.toml"));
        assert_eq!(config, RegmanConfig::default());

        // 명시적 load는 IO 에러
        let err = RegmanConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
