pub mod cart_view;
pub mod catalog_list;
pub mod fetch;
pub mod product_detail;
pub mod reviews_section;
pub mod routes;

pub use cart_view::{CartRow, CartView, TotalsSummary};
pub use catalog_list::{product_card, CatalogSection, ProductCard};
pub use fetch::FetchState;
pub use product_detail::{ProductDetail, ProductDetailView};
pub use reviews_section::{review_card, ReviewCard, ReviewsSection};
pub use routes::Route;
