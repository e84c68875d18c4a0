pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::product::{NewProduct, Product, ProductPatch};
pub use infra::config::AppConfig;
pub use storage::{MemoryProductStore, PgProductStore, ProductStore, StoreError};
