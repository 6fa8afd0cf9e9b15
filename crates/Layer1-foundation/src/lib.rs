//! # regman-foundation
//!
//! Foundation layer for regman:
//! - Error: 레지스트리/매니저 에러 타입
//! - Config: 통합 설정 (RegmanConfig)
//! - Logging: tracing 구독자 초기화

pub mod config;
pub mod error;
pub mod logging;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{RegmanConfig, DEFAULT_INITIAL_CAPACITY, MAX_INITIAL_CAPACITY, REGMAN_CONFIG_FILE};
