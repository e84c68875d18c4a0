pub mod products;

pub use products::{MemoryProductStore, PgProductStore, ProductStore, StoreError};
