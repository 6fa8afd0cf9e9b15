//! Registry Entry - 레지스트리 항목 정의

use chrono::{DateTime, Utc};
use std::sync::Arc;

// ============================================================================
// EntryMetadata - 항목 메타데이터
// ============================================================================

/// 레지스트리 항목의 메타데이터
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata {
    /// 고유 키 (이름)
    pub key: String,

    /// 등록 시간
    pub registered_at: DateTime<Utc>,

    /// 마지막 업데이트 시간
    pub updated_at: DateTime<Utc>,

    /// 교체 횟수
    pub replace_count: u64,
}

impl EntryMetadata {
    /// 새 메타데이터 생성
    pub fn new(key: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            key: key.into(),
            registered_at: now,
            updated_at: now,
            replace_count: 0,
        }
    }

    /// 교체로 인한 업데이트
    pub fn mark_replaced(&mut self) {
        self.updated_at = Utc::now();
        self.replace_count = self.replace_count.saturating_add(1);
    }
}

// ============================================================================
// RegistryEntry - 레지스트리 항목
// ============================================================================

/// 레지스트리 항목 - 값과 메타데이터를 함께 보관
pub(crate) struct RegistryEntry<T: ?Sized> {
    pub value: Arc<T>,
    pub metadata: EntryMetadata,
}

impl<T: ?Sized> RegistryEntry<T> {
    pub fn new(value: Arc<T>, key: impl Into<String>) -> Self {
        Self {
            value,
            metadata: EntryMetadata::new(key),
        }
    }

    /// 값 교체, 이전 값 반환
    pub fn replace(&mut self, new_value: Arc<T>) -> Arc<T> {
        self.metadata.mark_replaced();
        std::mem::replace(&mut self.value, new_value)
    }
}
