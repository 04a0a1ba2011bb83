//! Client-side route table.

use storefront_catalog::error::CatalogError;

/// Every page the storefront can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Product detail page, keyed by backend product id.
    Product(String),
    CategoryList,
    Cart,
    OnSale,
    NewArrivals,
    Brands,
    Account,
    Search,
}

impl Route {
    /// Parses a path into a route. Unknown paths and a product path with
    /// an empty id are validation errors rather than a silent home fallback.
    pub fn parse(path: &str) -> Result<Self, CatalogError> {
        let trimmed = path.trim_end_matches('/');
        if let Some(id) = path.strip_prefix("/product/") {
            let id = id.trim_matches('/');
            if id.is_empty() {
                return Err(CatalogError::Validation {
                    reason: "product route requires a product id".to_string(),
                });
            }
            return Ok(Self::Product(id.to_string()));
        }
        match trimmed {
            "" | "/" => Ok(Self::Home),
            "/category-list" => Ok(Self::CategoryList),
            "/cart" => Ok(Self::Cart),
            "/on-sale" => Ok(Self::OnSale),
            "/new-arrivals" => Ok(Self::NewArrivals),
            "/brands" => Ok(Self::Brands),
            "/account" => Ok(Self::Account),
            "/search" => Ok(Self::Search),
            other => Err(CatalogError::Validation {
                reason: format!("unknown route: {other}"),
            }),
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Product(id) => format!("/product/{id}"),
            Self::CategoryList => "/category-list".to_string(),
            Self::Cart => "/cart".to_string(),
            Self::OnSale => "/on-sale".to_string(),
            Self::NewArrivals => "/new-arrivals".to_string(),
            Self::Brands => "/brands".to_string(),
            Self::Account => "/account".to_string(),
            Self::Search => "/search".to_string(),
        }
    }
}
