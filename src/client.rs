//! カタログAPIクライアント
//!
//! 各エンドポイントを1回だけ呼ぶ（リトライなし）。
//! 失敗は用途ごとに FetchFailed / RefreshFailed / SubmitFailed に分類する。

use abno_catalog_common::api::{endpoint, ABNORMALITIES_PATH, RATE_PATH, RATINGS_PATH};
use abno_catalog_common::{parse_catalog, parse_ratings, Entity, Error, RateRequest, Ratings, Result};

#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// カタログと評価を並行取得
    pub async fn load(&self) -> Result<(Vec<Entity>, Ratings)> {
        let (catalog_body, ratings_body) = tokio::try_join!(
            self.get_text(ABNORMALITIES_PATH),
            self.get_text(RATINGS_PATH),
        )
        .map_err(Error::FetchFailed)?;

        let entities = parse_catalog(&catalog_body).map_err(|e| Error::FetchFailed(e.to_string()))?;
        let ratings = parse_ratings(&ratings_body).map_err(|e| Error::FetchFailed(e.to_string()))?;
        Ok((entities, ratings))
    }

    /// 評価のみ再取得
    pub async fn refresh_ratings(&self) -> Result<Ratings> {
        let body = self
            .get_text(RATINGS_PATH)
            .await
            .map_err(Error::RefreshFailed)?;
        parse_ratings(&body).map_err(|e| Error::RefreshFailed(e.to_string()))
    }

    /// 評価を送信（成功時の本文は使わない）
    pub async fn submit(&self, request: &RateRequest) -> Result<()> {
        let url = endpoint(&self.base_url, RATE_PATH);
        tracing::debug!("POST {} ({} -> {})", url, request.abnormality_id, request.rating);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::SubmitFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::SubmitFailed(format!("HTTP {}", status)));
        }
        Ok(())
    }

    async fn get_text(&self, path: &str) -> std::result::Result<String, String> {
        let url = endpoint(&self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await.map_err(|e| e.to_string())?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {} from {}", status, path));
        }
        response.text().await.map_err(|e| e.to_string())
    }
}
