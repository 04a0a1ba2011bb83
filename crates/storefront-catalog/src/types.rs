use serde::Serialize;

/// Optional filter/sort/pagination parameters for `GET /products`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub sort: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ProductQuery {
    /// Wire-format query pairs; unset fields are omitted entirely.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(sort) = &self.sort {
            params.push(("sort", sort.clone()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}

/// Optional filters for the reviews endpoints. `min_rating` maps to the
/// backend's `rating` parameter (a minimum, not an exact match).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewQuery {
    pub limit: Option<u32>,
    pub verified: Option<bool>,
    pub min_rating: Option<f64>,
    pub sort: Option<String>,
}

impl ReviewQuery {
    /// The storefront's default review filter: ten latest verified reviews
    /// rated four or better.
    #[must_use]
    pub fn storefront_default() -> Self {
        Self {
            limit: Some(10),
            verified: Some(true),
            min_rating: Some(4.0),
            sort: Some("-createdAt".to_string()),
        }
    }

    /// Wire-format query pairs; unset fields are omitted entirely.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(verified) = self.verified {
            params.push(("verified", verified.to_string()));
        }
        if let Some(min_rating) = self.min_rating {
            params.push(("rating", min_rating.to_string()));
        }
        if let Some(sort) = &self.sort {
            params.push(("sort", sort.clone()));
        }
        params
    }
}

/// Body for `POST /reviews`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub name: String,
    pub rating: f64,
    pub comment: String,
}

/// Body for `PUT /reviews/{id}`. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_query_omits_unset_fields() {
        assert!(ProductQuery::default().to_params().is_empty());
    }

    #[test]
    fn product_query_maps_all_fields() {
        let query = ProductQuery {
            category: Some("drones".to_string()),
            sort: Some("-price".to_string()),
            page: Some(2),
            limit: Some(24),
        };
        assert_eq!(
            query.to_params(),
            vec![
                ("category", "drones".to_string()),
                ("sort", "-price".to_string()),
                ("page", "2".to_string()),
                ("limit", "24".to_string()),
            ]
        );
    }

    #[test]
    fn review_query_min_rating_maps_to_rating_param() {
        let query = ReviewQuery::storefront_default();
        let params = query.to_params();
        assert!(params.contains(&("rating", "4".to_string())));
        assert!(params.contains(&("verified", "true".to_string())));
        assert!(params.contains(&("limit", "10".to_string())));
        assert!(params.contains(&("sort", "-createdAt".to_string())));
    }

    #[test]
    fn new_review_serializes_camel_case() {
        let review = NewReview {
            product_id: Some("p1".to_string()),
            name: "Alex M.".to_string(),
            rating: 5.0,
            comment: "Top notch.".to_string(),
        };
        let json = serde_json::to_value(&review).expect("serialization failed");
        assert_eq!(json["productId"], "p1");
        assert_eq!(json["comment"], "Top notch.");
    }

    #[test]
    fn review_patch_skips_unset_fields() {
        let patch = ReviewPatch {
            rating: Some(4.0),
            comment: None,
        };
        let json = serde_json::to_value(&patch).expect("serialization failed");
        assert!(json.get("comment").is_none());
        assert_eq!(json["rating"], 4.0);
    }
}
