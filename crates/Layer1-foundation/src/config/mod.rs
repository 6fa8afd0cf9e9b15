//! Config - 통합 설정 관리
//!
//! - `settings.rs` - RegmanConfig (프리로드, 용량, 로그 정책)

mod settings;

pub use settings::{
    RegmanConfig, DEFAULT_INITIAL_CAPACITY, MAX_INITIAL_CAPACITY, REGMAN_CONFIG_FILE,
};
