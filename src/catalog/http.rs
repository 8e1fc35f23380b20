//! HTTP recipe catalog client.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::CatalogConfig;
use crate::AppError;

use super::{RecipeCatalog, RecipeDetail, RecipeSummary};

/// Client for a spoonacular-style catalog API.
///
/// `GET {base}/recipes/complexSearch?query=...` for search and
/// `GET {base}/recipes/{id}/information` for detail, authenticated by an
/// `apiKey` query parameter. Timeouts come from the injected
/// `reqwest::Client`.
#[derive(Clone)]
pub struct HttpRecipeCatalog {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl HttpRecipeCatalog {
    pub fn new(client: reqwest::Client, config: CatalogConfig) -> Self {
        Self { client, config }
    }

    fn unavailable(err: &reqwest::Error) -> AppError {
        log::error!(
            target: "cookmark::catalog",
            "msg=\"catalog request failed\" error=\"{err}\""
        );
        AppError::CatalogUnavailable
    }
}

// The catalog sends numeric ids; everything in this crate keys recipes by
// the id's string form.
#[derive(Deserialize)]
struct WireSummary {
    id: i64,
    title: String,
    image: Option<String>,
}

#[derive(Deserialize)]
struct SearchEnvelope {
    results: Vec<WireSummary>,
}

#[derive(Deserialize)]
struct WireDetail {
    id: i64,
    title: String,
    image: Option<String>,
    summary: Option<String>,
    #[serde(rename = "sourceUrl")]
    source_url: Option<String>,
}

#[async_trait]
impl RecipeCatalog for HttpRecipeCatalog {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, AppError> {
        let url = format!("{}/recipes/complexSearch", self.config.base_url);

        let envelope: SearchEnvelope = self
            .client
            .get(&url)
            .query(&[
                ("query", query),
                ("number", "10"),
                ("apiKey", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| Self::unavailable(&e))?
            .json()
            .await
            .map_err(|e| Self::unavailable(&e))?;

        Ok(envelope
            .results
            .into_iter()
            .map(|r| RecipeSummary {
                id: r.id.to_string(),
                title: r.title,
                image: r.image,
            })
            .collect())
    }

    async fn find(&self, recipe_id: &str) -> Result<Option<RecipeDetail>, AppError> {
        let url = format!("{}/recipes/{}/information", self.config.base_url, recipe_id);

        let response = self
            .client
            .get(&url)
            .query(&[("apiKey", &self.config.api_key)])
            .send()
            .await
            .map_err(|e| Self::unavailable(&e))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let detail: WireDetail = response
            .error_for_status()
            .map_err(|e| Self::unavailable(&e))?
            .json()
            .await
            .map_err(|e| Self::unavailable(&e))?;

        Ok(Some(RecipeDetail {
            id: detail.id.to_string(),
            title: detail.title,
            image: detail.image,
            summary: detail.summary,
            source_url: detail.source_url,
        }))
    }
}
