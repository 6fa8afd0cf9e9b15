//! Registry Manager - 이름이 붙은 레지스트리 모음
//!
//! 매니저의 락은 구조 변경(생성/제거/목록)에만 사용합니다. 반환된
//! `Arc<Registry<T>>`에 대한 키 단위 연산은 각 레지스트리의 락만 사용하므로
//! 서로 다른 레지스트리 작업끼리 매니저 락에서 경합하지 않습니다.

use crate::registry::Registry;
use indexmap::IndexMap;
use parking_lot::RwLock;
use regman_foundation::{Error, RegmanConfig, Result};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// 타입이 지워진 레지스트리를 다루는 매니저
pub type AnyRegistryManager = RegistryManager<dyn Any + Send + Sync>;

/// 레지스트리 매니저
///
/// 전역 상태로 두지 않고, 소유자가 만들어 `Arc`로 필요한 곳에 전달합니다.
pub struct RegistryManager<T: ?Sized + Send + Sync> {
    /// 레지스트리 저장소 (이름 -> 레지스트리)
    registries: RwLock<IndexMap<String, Arc<Registry<T>>>>,

    /// 새 레지스트리에 적용할 설정
    config: RegmanConfig,
}

impl<T: ?Sized + Send + Sync> RegistryManager<T> {
    /// 새 매니저 생성
    pub fn new() -> Self {
        Self::with_config(RegmanConfig::default())
    }

    /// 설정으로 생성 (`preload`의 레지스트리를 미리 생성)
    pub fn with_config(config: RegmanConfig) -> Self {
        let mut registries = IndexMap::with_capacity(config.preload.len());
        for name in &config.preload {
            registries
                .entry(name.clone())
                .or_insert_with(|| Arc::new(Registry::with_config(name.clone(), &config)));
        }

        if !registries.is_empty() {
            debug!("Preloaded {} registries", registries.len());
        }

        Self {
            registries: RwLock::new(registries),
            config,
        }
    }

    /// 현재 설정
    pub fn config(&self) -> &RegmanConfig {
        &self.config
    }

    // ========================================================================
    // 생성 / 제거
    // ========================================================================

    /// 새 레지스트리 생성 (이미 있으면 `Error::DuplicateRegistry`)
    pub fn create_registry(&self, name: impl Into<String>) -> Result<Arc<Registry<T>>> {
        let name = name.into();
        let mut registries = self.registries.write();

        if registries.contains_key(&name) {
            return Err(Error::DuplicateRegistry(name));
        }

        let registry = Arc::new(Registry::with_config(name.clone(), &self.config));
        registries.insert(name.clone(), Arc::clone(&registry));
        drop(registries);

        debug!("Created registry: {}", name);
        Ok(registry)
    }

    /// 레지스트리 조회, 없으면 생성
    ///
    /// 확인과 생성은 쓰기 락 안에서 한 번에 일어나므로, 동시에 호출한
    /// 스레드들은 모두 같은 인스턴스를 받습니다.
    pub fn get_or_create_registry(&self, name: impl Into<String>) -> Arc<Registry<T>> {
        let name = name.into();
        if let Some(registry) = self.registries.read().get(&name) {
            return Arc::clone(registry);
        }

        let mut registries = self.registries.write();
        let registry = registries.entry(name.clone()).or_insert_with(|| {
            debug!("Created registry: {}", name);
            Arc::new(Registry::with_config(name.as_str(), &self.config))
        });
        Arc::clone(registry)
    }

    /// 레지스트리를 매니저에서 분리하여 반환
    ///
    /// 다른 스레드가 이미 가진 핸들은 계속 유효합니다.
    pub fn remove_registry(&self, name: &str) -> Result<Arc<Registry<T>>> {
        let removed = self.registries.write().shift_remove(name);

        match removed {
            Some(registry) => {
                debug!("Removed registry: {}", name);
                Ok(registry)
            }
            None => Err(Error::RegistryNotFound(name.to_string())),
        }
    }

    /// 모든 레지스트리 분리 (내용은 건드리지 않음), 분리된 수 반환
    pub fn clear(&self) -> usize {
        let detached = {
            let mut registries = self.registries.write();
            let detached = registries.len();
            registries.clear();
            detached
        };

        info!("Detached {} registries", detached);
        detached
    }

    // ========================================================================
    // 조회
    // ========================================================================

    /// 레지스트리 조회 (없으면 `Error::RegistryNotFound`)
    pub fn get_registry(&self, name: &str) -> Result<Arc<Registry<T>>> {
        self.registries
            .read()
            .get(name)
            .map(Arc::clone)
            .ok_or_else(|| Error::RegistryNotFound(name.to_string()))
    }

    /// 레지스트리 존재 여부
    pub fn contains_registry(&self, name: &str) -> bool {
        self.registries.read().contains_key(name)
    }

    /// 레지스트리 이름 목록 (스냅샷)
    pub fn list_registries(&self) -> Vec<String> {
        self.registries.read().keys().cloned().collect()
    }

    /// 모든 (이름, 레지스트리) 쌍 (스냅샷)
    pub fn all(&self) -> Vec<(String, Arc<Registry<T>>)> {
        let registries = self.registries.read();
        registries
            .iter()
            .map(|(name, registry)| (name.clone(), Arc::clone(registry)))
            .collect()
    }

    /// 레지스트리 수
    pub fn len(&self) -> usize {
        self.registries.read().len()
    }

    /// 비어있는지 확인
    pub fn is_empty(&self) -> bool {
        self.registries.read().is_empty()
    }
}

impl<T: ?Sized + Send + Sync> Default for RegistryManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + Send + Sync> fmt::Display for RegistryManager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<RegistryManager registries=[{}]>",
            self.list_registries().join(", ")
        )
    }
}

impl<T: ?Sized + Send + Sync> fmt::Debug for RegistryManager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryManager")
            .field("registries", &self.list_registries())
            .field("config", &self.config)
            .finish()
    }
}
