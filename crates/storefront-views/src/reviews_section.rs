//! Headless controller for the customer-reviews section.

use storefront_catalog::error::CatalogError;
use storefront_catalog::types::ReviewQuery;
use storefront_catalog::CatalogClient;
use storefront_core::Review;

use crate::fetch::FetchState;

/// Reviews carousel, global or scoped to one product.
pub struct ReviewsSection {
    product_id: Option<String>,
    query: ReviewQuery,
    state: FetchState<Vec<Review>>,
    generation: u64,
}

impl ReviewsSection {
    /// Homepage section: latest verified reviews rated four or better.
    #[must_use]
    pub fn homepage() -> Self {
        Self::with_query(None, ReviewQuery::storefront_default())
    }

    /// Global reviews listing under a caller-chosen filter.
    #[must_use]
    pub fn with_filters(query: ReviewQuery) -> Self {
        Self::with_query(None, query)
    }

    /// Section scoped to one product's reviews.
    #[must_use]
    pub fn for_product(product_id: impl Into<String>, query: ReviewQuery) -> Self {
        Self::with_query(Some(product_id.into()), query)
    }

    fn with_query(product_id: Option<String>, query: ReviewQuery) -> Self {
        Self {
            product_id,
            query,
            state: FetchState::Loading,
            generation: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &FetchState<Vec<Review>> {
        &self.state
    }

    pub async fn load(&mut self, client: &CatalogClient) {
        let token = self.begin();
        let result = match &self.product_id {
            Some(id) => client.list_product_reviews(id, &self.query).await,
            None => client.list_reviews(&self.query).await,
        };
        self.apply(token, result);
    }

    /// Re-issues the same request after a failure.
    pub async fn retry(&mut self, client: &CatalogClient) {
        self.load(client).await;
    }

    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = FetchState::Loading;
        self.generation
    }

    pub fn apply(&mut self, token: u64, result: Result<Vec<Review>, CatalogError>) {
        if token != self.generation {
            tracing::debug!("discarding stale reviews result");
            return;
        }
        self.state = match result {
            Ok(reviews) if reviews.is_empty() => FetchState::Empty,
            Ok(reviews) => FetchState::Ready(reviews),
            Err(err) => FetchState::Failed(err.to_string()),
        };
    }

    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        self.state.ready().map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn cards(&self) -> Vec<ReviewCard> {
        self.reviews().iter().map(review_card).collect()
    }
}

/// Everything a review card renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCard {
    pub author: String,
    pub verified: bool,
    pub full_stars: u8,
    pub body: String,
    /// `Posted on <date>` line, absent when the backend timestamp did not
    /// parse.
    pub posted_label: Option<String>,
}

#[must_use]
pub fn review_card(review: &Review) -> ReviewCard {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let full_stars = review.rating.floor() as u8;
    ReviewCard {
        author: review.author.clone(),
        verified: review.verified,
        full_stars,
        body: review.body.clone(),
        posted_label: review
            .posted_at
            .map(|dt| format!("Posted on {}", dt.format("%B %-d, %Y"))),
    }
}
