//! Registry Traits - 레지스트리 등록 인터페이스

// ============================================================================
// Registerable - 레지스트리에 등록 가능한 항목의 trait
// ============================================================================

/// 자기 키를 알고 있는 항목이 구현하는 trait
///
/// 플러그인 계열 trait의 supertrait로 두면 `Registry<dyn Plugin>`에서
/// [`Registry::register_item`](super::Registry::register_item)으로 바로 등록할 수 있습니다.
pub trait Registerable: Send + Sync {
    /// 고유 식별자 (이름)
    fn registry_key(&self) -> String;
}
