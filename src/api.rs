//! Backend API Client
//!
//! HTTP bindings for the watchlist backend, one function per endpoint.
//! The backend signals logical failures with an `{"error": ...}` body
//! (possibly alongside a non-2xx status), so replies are decoded without
//! gating on the status code.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::models::Stock;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Logical error reported by the backend
    #[error("{0}")]
    Backend(String),
    /// Transport-level failure (request never completed)
    #[error("request failed: {0}")]
    Http(String),
    /// Response body did not match the expected shape
    #[error("malformed response: {0}")]
    Decode(String),
}

#[derive(Serialize)]
pub struct AddStockArgs<'a> {
    pub ticker: &'a str,
    pub strategy: &'a str,
}

/// Backend reply: either the expected payload or an error object.
/// `Err` is listed first so `{"error": ...}` never decodes as a payload.
#[derive(Deserialize)]
#[serde(untagged)]
enum ApiReply<T> {
    Err { error: String },
    Ok(T),
}

impl<T> ApiReply<T> {
    fn into_result(self) -> Result<T, ApiError> {
        match self {
            ApiReply::Err { error } => Err(ApiError::Backend(error)),
            ApiReply::Ok(payload) => Ok(payload),
        }
    }
}

fn http_err(e: gloo_net::Error) -> ApiError {
    ApiError::Http(e.to_string())
}

fn js_err(e: JsValue) -> ApiError {
    ApiError::Http(format!("{:?}", e))
}

async fn fetch_json<T>(url: &str) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    let resp = Request::get(url).send().await.map_err(http_err)?;
    resp.json::<ApiReply<T>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .into_result()
}

pub async fn list_stocks(api_base: &str) -> Result<Vec<Stock>, ApiError> {
    fetch_json(&format!("{}/stocks", api_base)).await
}

pub async fn add_stock(api_base: &str, args: &AddStockArgs<'_>) -> Result<Stock, ApiError> {
    let resp = Request::post(&format!("{}/add_stock", api_base))
        .json(args)
        .map_err(http_err)?
        .send()
        .await
        .map_err(http_err)?;
    resp.json::<ApiReply<Stock>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .into_result()
}

pub async fn delete_stock(api_base: &str, id: u32) -> Result<(), ApiError> {
    // Response body is ignored
    Request::delete(&format!("{}/delete_stock/{}", api_base, id))
        .send()
        .await
        .map_err(http_err)?;
    Ok(())
}

pub async fn update_prices(api_base: &str) -> Result<Vec<Stock>, ApiError> {
    fetch_json(&format!("{}/update_prices", api_base)).await
}

pub async fn upload_file(
    api_base: &str,
    file: &web_sys::File,
    strategy: &str,
) -> Result<Vec<Stock>, ApiError> {
    let form = FormData::new().map_err(js_err)?;
    form.append_with_blob("file", file).map_err(js_err)?;
    form.append_with_str("strategy", strategy).map_err(js_err)?;

    let resp = Request::post(&format!("{}/upload", api_base))
        .body(form)
        .map_err(http_err)?
        .send()
        .await
        .map_err(http_err)?;
    resp.json::<ApiReply<Vec<Stock>>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_object_decodes_as_backend_error() {
        let reply: ApiReply<Stock> =
            serde_json::from_str(r#"{"error": "Could not fetch price for ticker"}"#).unwrap();
        match reply.into_result() {
            Err(ApiError::Backend(msg)) => {
                assert_eq!(msg, "Could not fetch price for ticker")
            }
            _ => panic!("expected backend error"),
        }
    }

    #[test]
    fn test_stock_payload_decodes_as_ok() {
        let json = r#"{
            "id": 1,
            "ticker": "ABC",
            "strategy": "Short",
            "entry_price": 10,
            "current_price": 12,
            "roi": 20
        }"#;
        let reply: ApiReply<Stock> = serde_json::from_str(json).unwrap();
        let stock = reply.into_result().unwrap();
        assert_eq!(stock.ticker, "ABC");
    }

    #[test]
    fn test_array_payload_decodes_as_ok() {
        let json = r#"[
            {"id": 1, "ticker": "ABC", "strategy": "Short",
             "entry_price": 10, "current_price": 12, "roi": 20},
            {"id": 2, "ticker": "DEF", "strategy": "Long",
             "entry_price": 5, "current_price": 4, "roi": -20}
        ]"#;
        let reply: ApiReply<Vec<Stock>> = serde_json::from_str(json).unwrap();
        let stocks = reply.into_result().unwrap();
        assert_eq!(stocks.len(), 2);
    }

    #[test]
    fn test_empty_array_is_not_an_error() {
        let reply: ApiReply<Vec<Stock>> = serde_json::from_str("[]").unwrap();
        assert!(reply.into_result().unwrap().is_empty());
    }
}
