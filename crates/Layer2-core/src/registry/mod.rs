//! # Registry System
//!
//! 이름으로 등록하고 이름으로 찾는 Thread-safe 레지스트리
//!
//! ## 설계 원칙
//!
//! 1. **Interior Mutability**: RwLock을 사용하여 `Arc<Registry<T>>` 공유 상태에서도 변경 가능
//! 2. **원자적 확인-후-변경**: 중복 검사와 삽입/교체는 하나의 임계 구역
//! 3. **스냅샷 조회**: keys/values/items는 호출 시점의 복사본
//! 4. **명시적 정책**: 덮어쓰기는 호출자가 `allow_overwrite`로 선택
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                  Registry<T>                    │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  RwLock<IndexMap<String, RegistryEntry>>  │  │
//! │  │  ┌──────────┬──────────┬──────────┐       │  │
//! │  │  │ "csv"    │ "json"   │ ...      │       │  │
//! │  │  │ Arc<T>   │ Arc<T>   │          │       │  │
//! │  │  └──────────┴──────────┴──────────┘       │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## 사용 예시
//!
//! ```
//! use regman_core::registry::{Registerable, Registry};
//! use std::sync::Arc;
//!
//! trait Handler: Registerable {
//!     fn extension(&self) -> &'static str;
//! }
//!
//! struct CsvHandler;
//!
//! impl Registerable for CsvHandler {
//!     fn registry_key(&self) -> String {
//!         "csv".into()
//!     }
//! }
//!
//! impl Handler for CsvHandler {
//!     fn extension(&self) -> &'static str {
//!         ".csv"
//!     }
//! }
//!
//! let handlers: Registry<dyn Handler> = Registry::new("handlers");
//! handlers.register_item(Arc::new(CsvHandler)).unwrap();
//!
//! assert_eq!(handlers.get("csv").unwrap().extension(), ".csv");
//! assert!(handlers.get("json").is_err());
//! ```

mod entry;
mod store;
mod traits;

pub use entry::EntryMetadata;
pub use store::{AnyRegistry, Registry, RegistryStats};
pub use traits::Registerable;
