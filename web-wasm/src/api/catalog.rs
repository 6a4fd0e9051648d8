//! カタログAPI呼び出し（同一オリジンの相対パス）
//!
//! 各エンドポイントは1回だけ呼ぶ。リトライはしない。

use abno_catalog_common::api::{ABNORMALITIES_PATH, RATE_PATH, RATINGS_PATH};
use abno_catalog_common::{
    parse_catalog, parse_ratings, Entity, Error, RateRequest, Ratings, Result,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// fetch呼び出し（共通処理）。成功時は本文を文字列で返す
async fn fetch_text(url: &str, body: Option<&str>) -> std::result::Result<String, String> {
    let opts = RequestInit::new();
    opts.set_mode(RequestMode::SameOrigin);
    match body {
        Some(body) => {
            opts.set_method("POST");
            opts.set_body(&JsValue::from_str(body));
        }
        None => opts.set_method("GET"),
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(format!("HTTP {} from {}", resp.status(), url));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(text.as_string().unwrap_or_default())
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// カタログと評価を並行取得
pub async fn load_catalog() -> Result<(Vec<Entity>, Ratings)> {
    tracing::debug!("loading catalog");
    let (catalog_body, ratings_body) = futures::try_join!(
        fetch_text(ABNORMALITIES_PATH, None),
        fetch_text(RATINGS_PATH, None),
    )
    .map_err(Error::FetchFailed)?;

    let entities = parse_catalog(&catalog_body).map_err(|e| Error::FetchFailed(e.to_string()))?;
    let ratings = parse_ratings(&ratings_body).map_err(|e| Error::FetchFailed(e.to_string()))?;
    Ok((entities, ratings))
}

/// 評価のみ再取得
pub async fn refresh_ratings() -> Result<Ratings> {
    let body = fetch_text(RATINGS_PATH, None)
        .await
        .map_err(Error::RefreshFailed)?;
    parse_ratings(&body).map_err(|e| Error::RefreshFailed(e.to_string()))
}

/// 評価を送信（成功時の本文は使わない）
pub async fn submit_rating(request: &RateRequest) -> Result<()> {
    let body = serde_json::to_string(request)?;
    fetch_text(RATE_PATH, Some(&body))
        .await
        .map(|_| ())
        .map_err(Error::SubmitFailed)
}
