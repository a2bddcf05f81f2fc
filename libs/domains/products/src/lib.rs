//! Products Domain
//!
//! Product entity, its storage contract and the service that callers use for
//! create, read, update, delete and paginated listing.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{CreateProduct, InMemoryProductRepository, Product, ProductService};
//!
//! # async fn run() -> domain_products::ProductResult<()> {
//! let service = ProductService::new(InMemoryProductRepository::new());
//!
//! let product = Product::new(CreateProduct {
//!     name: "Keyboard".to_string(),
//!     price: 49.9,
//! })?;
//! service.create(product).await?;
//!
//! let first_page = service.list(1, 10, "desc").await?;
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod models;
pub mod persistence;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use models::{CreateProduct, Product, SortDirection};
pub use persistence::SeaOrmProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
