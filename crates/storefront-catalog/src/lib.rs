pub mod assets;
pub mod client;
pub mod envelope;
pub mod error;
pub mod fields;
pub mod normalize;
pub mod types;

pub use assets::resolve_image_url;
pub use client::CatalogClient;
pub use error::CatalogError;
pub use normalize::{normalize_product, normalize_products, normalize_review, normalize_reviews};
pub use types::{NewReview, ProductQuery, ReviewPatch, ReviewQuery};
