//! Logging - tracing 구독자 초기화
//!
//! 라이브러리 내부는 `tracing` 매크로만 사용하고, 구독자 설치는 애플리케이션
//! 초기화 지점에서 한 번 호출합니다.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 전역 tracing 구독자 설치
///
/// `RUST_LOG`가 있으면 우선하고, 없으면 `debug` 여부에 따라 레벨을 고릅니다.
/// 이미 설치된 경우 `false`를 반환합니다.
pub fn init(debug: bool) -> bool {
    let log_level = if debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .is_ok()
}
