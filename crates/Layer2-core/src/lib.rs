//! regman-core: Thread-safe Registry Runtime
//!
//! Layer2 - 레지스트리 구현 레이어
//!
//! # 주요 모듈
//!
//! - `registry`: 단일 레지스트리 (`Registry<T>`) 및 등록 인터페이스
//! - `manager`: 이름이 붙은 레지스트리 모음 (`RegistryManager<T>`)
//!
//! # 사용 예시
//!
//! ```
//! use regman_core::{RegistryManager, Error};
//! use std::sync::Arc;
//!
//! // 초기화 지점에서 한 번 생성하여 Arc로 공유
//! let manager: Arc<RegistryManager<str>> = Arc::new(RegistryManager::new());
//!
//! let plugins = manager.create_registry("plugins")?;
//! plugins.register("csv", Arc::from("CsvHandler"), false)?;
//! plugins.register("json", Arc::from("JsonHandler"), false)?;
//!
//! let csv = manager.get_registry("plugins")?.get("csv")?;
//! assert_eq!(&*csv, "CsvHandler");
//!
//! manager.remove_registry("plugins")?;
//! assert!(matches!(
//!     manager.get_registry("plugins"),
//!     Err(Error::RegistryNotFound(_))
//! ));
//! # Ok::<(), regman_core::Error>(())
//! ```

pub mod manager;
pub mod registry;

// Re-exports: Foundation
pub use regman_foundation::{Error, RegmanConfig, Result};

// Re-exports: Registry
pub use registry::{AnyRegistry, EntryMetadata, Registerable, Registry, RegistryStats};

// Re-exports: Manager
pub use manager::{AnyRegistryManager, RegistryManager};
