//! Registry - 이름이 붙은 Thread-safe 키/값 저장소

use super::entry::{EntryMetadata, RegistryEntry};
use super::traits::Registerable;
use indexmap::IndexMap;
use parking_lot::RwLock;
use regman_foundation::{Error, RegmanConfig, Result, MAX_INITIAL_CAPACITY};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 타입이 지워진 레지스트리 - 서로 다른 타입의 값을 함께 보관
pub type AnyRegistry = Registry<dyn Any + Send + Sync>;

// ============================================================================
// Registry<T> - 제네릭 레지스트리
// ============================================================================

/// 이름이 붙은 Thread-safe 레지스트리
///
/// 모든 연산은 하나의 락 안에서 끝나며, 연산끼리는 선형화 가능합니다.
/// 확인 후 삽입/교체 같은 복합 연산도 같은 임계 구역에서 수행되므로
/// 다른 스레드가 중간 상태를 관찰할 수 없습니다.
///
/// 순회 순서는 삽입 순서이며, 덮어쓰기는 키의 원래 위치를 유지합니다.
pub struct Registry<T: ?Sized + Send + Sync> {
    /// 레지스트리 이름 (에러 메시지, 로그용)
    name: String,

    /// 항목 저장소
    entries: RwLock<IndexMap<String, RegistryEntry<T>>>,

    /// 덮어쓰기 시 info 로그 출력 여부
    log_overwrites: bool,
}

impl<T: ?Sized + Send + Sync> Registry<T> {
    /// 새 레지스트리 생성
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, &RegmanConfig::default())
    }

    /// 설정을 적용하여 생성
    ///
    /// 초기 용량은 `MAX_INITIAL_CAPACITY`를 넘지 않도록 잘립니다.
    pub fn with_config(name: impl Into<String>, config: &RegmanConfig) -> Self {
        let name = name.into();
        let capacity = if config.initial_capacity > MAX_INITIAL_CAPACITY {
            warn!(
                "[{}] initial_capacity {} exceeds {}, clamped",
                name, config.initial_capacity, MAX_INITIAL_CAPACITY
            );
            MAX_INITIAL_CAPACITY
        } else {
            config.initial_capacity
        };

        Self {
            name,
            entries: RwLock::new(IndexMap::with_capacity(capacity)),
            log_overwrites: config.log_overwrites,
        }
    }

    /// 레지스트리 이름
    pub fn name(&self) -> &str {
        &self.name
    }

    // ========================================================================
    // 등록 / 해제
    // ========================================================================

    /// 항목 등록
    ///
    /// - 키가 없으면 삽입 후 `Ok(None)`
    /// - 키가 있고 `allow_overwrite`가 false면 `Error::DuplicateKey` (변경 없음)
    /// - 키가 있고 `allow_overwrite`가 true면 교체 후 `Ok(Some(이전 값))`
    pub fn register(
        &self,
        key: impl Into<String>,
        value: Arc<T>,
        allow_overwrite: bool,
    ) -> Result<Option<Arc<T>>> {
        let key = key.into();
        let mut entries = self.entries.write();

        if let Some(entry) = entries.get_mut(&key) {
            if !allow_overwrite {
                return Err(Error::duplicate_key(&self.name, key));
            }

            let previous = entry.replace(value);
            let replace_count = entry.metadata.replace_count;
            drop(entries);

            if self.log_overwrites {
                info!("[{}] Replaced: {} (replace #{})", self.name, key, replace_count);
            }
            return Ok(Some(previous));
        }

        entries.insert(key.clone(), RegistryEntry::new(value, &key));
        drop(entries);

        debug!("[{}] Registered: {}", self.name, key);
        Ok(None)
    }

    /// 덮어쓰기 없이 등록
    pub fn add(&self, key: impl Into<String>, value: Arc<T>) -> Result<()> {
        self.register(key, value, false).map(|_| ())
    }

    /// 항목 등록 해제, 제거된 값 반환
    ///
    /// 없는 키는 `Error::KeyNotFound`. [`RegistryManager::remove_registry`]와
    /// 같은 정책입니다.
    ///
    /// [`RegistryManager::remove_registry`]: crate::RegistryManager::remove_registry
    pub fn unregister(&self, key: &str) -> Result<Arc<T>> {
        let removed = self.entries.write().shift_remove(key);

        match removed {
            Some(entry) => {
                debug!("[{}] Unregistered: {}", self.name, key);
                Ok(entry.value)
            }
            None => Err(Error::key_not_found(&self.name, key)),
        }
    }

    /// 전체 클리어, 제거된 항목 수 반환
    pub fn clear(&self) -> usize {
        let removed = {
            let mut entries = self.entries.write();
            let removed = entries.len();
            entries.clear();
            removed
        };

        info!("[{}] Cleared {} entries", self.name, removed);
        removed
    }

    // ========================================================================
    // 조회
    // ========================================================================

    /// 항목 조회
    pub fn get(&self, key: &str) -> Result<Arc<T>> {
        self.try_get(key)
            .ok_or_else(|| Error::key_not_found(&self.name, key))
    }

    /// 항목 조회 (없으면 None)
    pub fn try_get(&self, key: &str) -> Option<Arc<T>> {
        let entries = self.entries.read();
        entries.get(key).map(|e| Arc::clone(&e.value))
    }

    /// 항목 조회 (없으면 기본값)
    pub fn get_or_default(&self, key: &str, default: Arc<T>) -> Arc<T> {
        self.try_get(key).unwrap_or(default)
    }

    /// 항목 메타데이터 조회
    pub fn metadata(&self, key: &str) -> Option<EntryMetadata> {
        let entries = self.entries.read();
        entries.get(key).map(|e| e.metadata.clone())
    }

    /// 항목 존재 여부
    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// 항목 수
    pub fn count(&self) -> usize {
        self.entries.read().len()
    }

    /// 비어있는지 확인
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    // ========================================================================
    // 스냅샷 (호출 시점의 복사본)
    // ========================================================================

    /// 모든 키
    pub fn keys(&self) -> Vec<String> {
        let entries = self.entries.read();
        entries.keys().cloned().collect()
    }

    /// 모든 값
    pub fn values(&self) -> Vec<Arc<T>> {
        let entries = self.entries.read();
        entries.values().map(|e| Arc::clone(&e.value)).collect()
    }

    /// 모든 (키, 값) 쌍
    pub fn items(&self) -> Vec<(String, Arc<T>)> {
        let entries = self.entries.read();
        entries
            .iter()
            .map(|(k, e)| (k.clone(), Arc::clone(&e.value)))
            .collect()
    }

    // ========================================================================
    // 통계
    // ========================================================================

    /// 레지스트리 통계
    pub fn stats(&self) -> RegistryStats {
        let entries = self.entries.read();

        RegistryStats {
            name: self.name.clone(),
            total: entries.len(),
            replaced: entries
                .values()
                .map(|e| e.metadata.replace_count)
                .fold(0u64, u64::saturating_add),
        }
    }
}

impl<T: ?Sized + Registerable> Registry<T> {
    /// 항목이 알려주는 키로 등록 (덮어쓰기 불가), 사용된 키 반환
    pub fn register_item(&self, item: Arc<T>) -> Result<String> {
        let key = item.registry_key();
        self.register(key.clone(), item, false)?;
        Ok(key)
    }
}

impl Registry<dyn Any + Send + Sync> {
    /// 구체 타입으로 다운캐스트하여 조회
    pub fn get_as<U: Any + Send + Sync>(&self, key: &str) -> Result<Arc<U>> {
        self.get(key)?
            .downcast::<U>()
            .map_err(|_| Error::TypeMismatch {
                registry: self.name.clone(),
                key: key.to_string(),
                expected: std::any::type_name::<U>(),
            })
    }
}

impl<T: ?Sized + Send + Sync> fmt::Display for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Registry name={} size={}>", self.name, self.count())
    }
}

impl<T: ?Sized + Send + Sync> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.name)
            .field("keys", &self.keys())
            .finish()
    }
}

/// 레지스트리 통계
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStats {
    pub name: String,
    pub total: usize,
    /// 전체 항목의 교체 횟수 합
    pub replaced: u64,
}
