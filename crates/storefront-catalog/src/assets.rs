use storefront_core::PLACEHOLDER_IMAGE;

/// Resolves an image reference against the static-asset base URL.
///
/// Absolute URLs pass through unchanged; relative paths join against the
/// base. An empty reference resolves to the placeholder asset, and an empty
/// base leaves relative paths as-is.
#[must_use]
pub fn resolve_image_url(asset_base: &str, image: &str) -> String {
    if image.is_empty() {
        return PLACEHOLDER_IMAGE.to_string();
    }
    if image.starts_with("http://") || image.starts_with("https://") {
        return image.to_string();
    }
    if asset_base.is_empty() {
        return image.to_string();
    }
    format!(
        "{}/{}",
        asset_base.trim_end_matches('/'),
        image.trim_start_matches('/')
    )
}
