use std::time::Duration;

use reqwest::{Client, Method, Url};
use serde_json::Value;
use storefront_core::{AppConfig, CartLine, Product, Review};

use crate::envelope;
use crate::error::CatalogError;
use crate::normalize;
use crate::types::{NewReview, ProductQuery, ReviewPatch, ReviewQuery};

/// HTTP client for the storefront REST backend.
///
/// Each operation is a single round trip with a fixed timeout; there is no
/// retry, backoff, or circuit breaking — a failure is surfaced to the caller
/// immediately as a typed [`CatalogError`] naming the operation. The bearer
/// token, when configured, is attached to every request and never refreshed.
pub struct CatalogClient {
    client: Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl CatalogClient {
    /// Creates a client against the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Network`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        bearer_token: Option<&str>,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("storefront/0.1")
            .build()
            .map_err(|e| CatalogError::Network {
                context: "client construction".to_string(),
                source: e,
            })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token: bearer_token.map(str::to_owned),
        })
    }

    /// Creates a client from the loaded application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Network`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        Self::new(
            &config.api_base_url,
            config.request_timeout_secs,
            config.api_token.as_deref(),
        )
    }

    /// Lists products, probing the response envelope and normalizing each
    /// entry. Malformed entries are skipped, not fatal.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Network`] on timeout or connectivity failure.
    /// - [`CatalogError::UnexpectedStatus`] on a non-2xx response.
    /// - [`CatalogError::UnexpectedResponseShape`] when no known envelope
    ///   yields an array.
    pub async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, CatalogError> {
        let context = "list products";
        let body = self
            .request_json(Method::GET, "/products", &query.to_params(), None, context)
            .await?;
        let items = envelope::extract_list(&body).ok_or_else(|| {
            CatalogError::UnexpectedResponseShape {
                context: context.to_string(),
            }
        })?;
        Ok(normalize::normalize_products(items))
    }

    /// Fetches and normalizes a single product by id. The response may be a
    /// bare object or wrapped in `data`/`product`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Validation`] when `id` is empty.
    /// - [`CatalogError::MalformedProductData`] when the payload has no
    ///   resolvable identifier.
    /// - Plus the transport errors listed on [`Self::list_products`].
    pub async fn get_product(&self, id: &str) -> Result<Product, CatalogError> {
        if id.trim().is_empty() {
            return Err(CatalogError::Validation {
                reason: "missing product id".to_string(),
            });
        }
        let context = format!("fetch product {id}");
        let body = self
            .request_json(Method::GET, &format!("/products/{id}"), &[], None, &context)
            .await?;
        let raw = envelope::extract_object(&body).ok_or_else(|| {
            CatalogError::UnexpectedResponseShape {
                context: context.clone(),
            }
        })?;
        normalize::normalize_product(raw)
    }

    /// Lists global reviews with optional filters.
    ///
    /// # Errors
    ///
    /// Same transport errors as [`Self::list_products`].
    pub async fn list_reviews(&self, query: &ReviewQuery) -> Result<Vec<Review>, CatalogError> {
        let context = "list reviews";
        let body = self
            .request_json(Method::GET, "/reviews", &query.to_params(), None, context)
            .await?;
        let items = envelope::extract_list(&body).ok_or_else(|| {
            CatalogError::UnexpectedResponseShape {
                context: context.to_string(),
            }
        })?;
        Ok(normalize::normalize_reviews(items))
    }

    /// Lists reviews for a single product.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Validation`] when `product_id` is empty, plus the
    /// transport errors listed on [`Self::list_products`].
    pub async fn list_product_reviews(
        &self,
        product_id: &str,
        query: &ReviewQuery,
    ) -> Result<Vec<Review>, CatalogError> {
        if product_id.trim().is_empty() {
            return Err(CatalogError::Validation {
                reason: "missing product id".to_string(),
            });
        }
        let context = format!("list reviews for product {product_id}");
        let body = self
            .request_json(
                Method::GET,
                &format!("/products/{product_id}/reviews"),
                &query.to_params(),
                None,
                &context,
            )
            .await?;
        let items = envelope::extract_list(&body).ok_or_else(|| {
            CatalogError::UnexpectedResponseShape {
                context: context.clone(),
            }
        })?;
        Ok(normalize::normalize_reviews(items))
    }

    /// Creates a review and returns the backend's normalized echo of it.
    ///
    /// # Errors
    ///
    /// Same transport errors as [`Self::list_products`];
    /// [`CatalogError::UnexpectedResponseShape`] when the echoed review has
    /// no recognizable shape.
    pub async fn create_review(&self, review: &NewReview) -> Result<Review, CatalogError> {
        let context = "create review";
        let body = serde_json::to_value(review).map_err(|e| CatalogError::Deserialize {
            context: context.to_string(),
            source: e,
        })?;
        let response = self
            .request_json(Method::POST, "/reviews", &[], Some(body), context)
            .await?;
        Self::extract_review(&response, context)
    }

    /// Updates a review in place.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Validation`] when `id` is empty, plus the errors
    /// listed on [`Self::create_review`].
    pub async fn update_review(
        &self,
        id: &str,
        patch: &ReviewPatch,
    ) -> Result<Review, CatalogError> {
        if id.trim().is_empty() {
            return Err(CatalogError::Validation {
                reason: "missing review id".to_string(),
            });
        }
        let context = format!("update review {id}");
        let body = serde_json::to_value(patch).map_err(|e| CatalogError::Deserialize {
            context: context.clone(),
            source: e,
        })?;
        let response = self
            .request_json(
                Method::PUT,
                &format!("/reviews/{id}"),
                &[],
                Some(body),
                &context,
            )
            .await?;
        Self::extract_review(&response, &context)
    }

    /// Deletes a review.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Validation`] when `id` is empty, plus the transport
    /// errors listed on [`Self::list_products`].
    pub async fn delete_review(&self, id: &str) -> Result<(), CatalogError> {
        if id.trim().is_empty() {
            return Err(CatalogError::Validation {
                reason: "missing review id".to_string(),
            });
        }
        let context = format!("delete review {id}");
        self.request_raw(Method::DELETE, &format!("/reviews/{id}"), &[], None, &context)
            .await?;
        Ok(())
    }

    /// Fetches the backend cart for one-shot store hydration. Entries
    /// without a product reference are dropped.
    ///
    /// # Errors
    ///
    /// Same transport errors as [`Self::list_products`].
    pub async fn fetch_cart(&self) -> Result<Vec<CartLine>, CatalogError> {
        let context = "fetch cart";
        let body = self
            .request_json(Method::GET, "/cart", &[], None, context)
            .await?;
        let items = envelope::extract_list(&body).ok_or_else(|| {
            CatalogError::UnexpectedResponseShape {
                context: context.to_string(),
            }
        })?;
        Ok(items
            .iter()
            .filter_map(normalize::normalize_cart_line)
            .collect())
    }

    fn extract_review(body: &Value, context: &str) -> Result<Review, CatalogError> {
        envelope::extract_object(body)
            .and_then(normalize::normalize_review)
            .ok_or_else(|| CatalogError::UnexpectedResponseShape {
                context: context.to_string(),
            })
    }

    /// Performs one request and parses the response body as JSON.
    async fn request_json(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
        body: Option<Value>,
        context: &str,
    ) -> Result<Value, CatalogError> {
        let text = self.request_raw(method, path, params, body, context).await?;
        serde_json::from_str(&text).map_err(|e| CatalogError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }

    /// Performs one request, asserting a 2xx status, and returns the raw
    /// response body.
    async fn request_raw(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
        body: Option<Value>,
        context: &str,
    ) -> Result<String, CatalogError> {
        let url = self.build_url(path, params, context)?;
        tracing::debug!(%url, context, "storefront API request");

        let mut request = self.client.request(method, url);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| CatalogError::Network {
            context: context.to_string(),
            source: e,
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                context: context.to_string(),
            });
        }
        response.text().await.map_err(|e| CatalogError::Network {
            context: context.to_string(),
            source: e,
        })
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters.
    fn build_url(
        &self,
        path: &str,
        params: &[(&str, String)],
        context: &str,
    ) -> Result<Url, CatalogError> {
        let mut url = Url::parse(&format!("{}{path}", self.base_url)).map_err(|e| {
            CatalogError::Validation {
                reason: format!("invalid request URL for {context}: {e}"),
            }
        })?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
