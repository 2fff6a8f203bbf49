//! Item Endpoints
//!
//! `GET`/`PUT /api/v1/user/{userId}/item/{itemId}`.

use async_trait::async_trait;
use gloo_net::http::Request;

use super::{bearer, ensure_ok};
use crate::error::{ApiError, ApiResult};
use crate::models::{Item, ItemEnvelope, ItemForm, ItemTarget};

/// Item read/write seam, implemented over HTTP in the browser and by fakes in tests
#[async_trait(?Send)]
pub trait ItemApi {
    /// Fetch the current item record
    async fn fetch_item(&self, target: &ItemTarget) -> ApiResult<Item>;

    /// Replace the item's editable fields
    async fn update_item(&self, target: &ItemTarget, form: &ItemForm) -> ApiResult<()>;
}

pub fn item_url(base_url: &str, target: &ItemTarget) -> String {
    format!(
        "{}/api/v1/user/{}/item/{}",
        base_url.trim_end_matches('/'),
        target.user_id,
        target.item_id
    )
}

/// `gloo-net` client against the configured backend origin
#[derive(Debug, Clone)]
pub struct HttpItemApi {
    base_url: String,
}

impl HttpItemApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

#[async_trait(?Send)]
impl ItemApi for HttpItemApi {
    async fn fetch_item(&self, target: &ItemTarget) -> ApiResult<Item> {
        let url = item_url(&self.base_url, target);
        log::debug!("GET {}", url);
        let response = Request::get(&url)
            .header("Authorization", &bearer(&target.token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let envelope: ItemEnvelope = ensure_ok(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(envelope.item)
    }

    async fn update_item(&self, target: &ItemTarget, form: &ItemForm) -> ApiResult<()> {
        let url = item_url(&self.base_url, target);
        log::debug!("PUT {}", url);
        let response = Request::put(&url)
            .header("Authorization", &bearer(&target.token))
            .json(form)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> ItemTarget {
        ItemTarget {
            user_id: "42".to_string(),
            item_id: "9".to_string(),
            token: "tok".to_string(),
        }
    }

    #[test]
    fn test_item_url_same_origin() {
        assert_eq!(item_url("", &target()), "/api/v1/user/42/item/9");
    }

    #[test]
    fn test_item_url_with_origin() {
        assert_eq!(
            item_url("http://localhost:3333/", &target()),
            "http://localhost:3333/api/v1/user/42/item/9"
        );
    }

    #[test]
    fn test_bearer_header() {
        assert_eq!(crate::api::bearer("abc"), "Bearer abc");
    }
}
