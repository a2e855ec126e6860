pub mod account;
pub mod bin;
pub mod collector;
pub mod driver;
pub mod payment;
pub mod schedule;

use ::common::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use crate::settings;

fn url(path: &str) -> String {
    settings::get_settings().api_url(path)
}

/// Send and turn non-2xx into `ApiError::Status` carrying the body text
async fn send(method: &str, path: &str, request: Request) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(|e| {
        log::error!("{} {} - Request failed: {}", method, path, e);
        ApiError::Network(e.to_string())
    })?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::warn!("{} {} - Non-OK response: {}", method, path, status);
        return Err(ApiError::Status { status, body });
    }

    Ok(response)
}

fn with_json<B: Serialize>(method: &str, path: &str, builder: RequestBuilder, body: &B) -> Result<Request, ApiError> {
    builder.json(body).map_err(|e| {
        log::error!("{} {} - Failed to serialize request: {}", method, path, e);
        ApiError::Encode(e.to_string())
    })
}

fn without_body(method: &str, path: &str, builder: RequestBuilder) -> Result<Request, ApiError> {
    builder.build().map_err(|e| {
        log::error!("{} {} - Failed to build request: {}", method, path, e);
        ApiError::Network(e.to_string())
    })
}

async fn read_text(method: &str, path: &str, response: Response) -> Result<String, ApiError> {
    let text = response.text().await.map_err(|e| {
        log::error!("{} {} - Failed to read response: {}", method, path, e);
        ApiError::Decode(e.to_string())
    })?;
    log::info!("{} {} - Success", method, path);
    Ok(text)
}

/// GET and parse the body as JSON
pub async fn get_json<T>(path: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    log::debug!("GET request to: {}", url(path));
    let request = without_body("GET", path, Request::get(&url(path)))?;
    let response = send("GET", path, request).await?;

    log::trace!("GET {} - Response received, parsing JSON", path);
    let data = response.json::<T>().await.map_err(|e| {
        log::error!("GET {} - Failed to parse response: {}", path, e);
        ApiError::Decode(e.to_string())
    })?;

    log::info!("GET {} - Success", path);
    Ok(data)
}

/// GET a plain-text body
pub async fn get_text(path: &str) -> Result<String, ApiError> {
    log::debug!("GET request to: {}", url(path));
    let request = without_body("GET", path, Request::get(&url(path)))?;
    let response = send("GET", path, request).await?;
    read_text("GET", path, response).await
}

/// POST a JSON body; the backend answers with a text message
pub async fn post_json_text<B>(path: &str, body: &B) -> Result<String, ApiError>
where
    B: Serialize,
{
    log::debug!("POST request to: {}", url(path));
    let request = with_json("POST", path, Request::post(&url(path)), body)?;
    let response = send("POST", path, request).await?;
    read_text("POST", path, response).await
}

/// PUT a JSON body; text response
pub async fn put_json_text<B>(path: &str, body: &B) -> Result<String, ApiError>
where
    B: Serialize,
{
    log::debug!("PUT request to: {}", url(path));
    let request = with_json("PUT", path, Request::put(&url(path)), body)?;
    let response = send("PUT", path, request).await?;
    read_text("PUT", path, response).await
}

/// PUT with no body, for query-string driven updates
pub async fn put_text(path: &str) -> Result<String, ApiError> {
    log::debug!("PUT request to: {}", url(path));
    let request = without_body(
        "PUT",
        path,
        Request::put(&url(path)).header("Content-Type", "application/json"),
    )?;
    let response = send("PUT", path, request).await?;
    read_text("PUT", path, response).await
}

pub async fn delete_text(path: &str) -> Result<String, ApiError> {
    log::debug!("DELETE request to: {}", url(path));
    let request = without_body("DELETE", path, Request::delete(&url(path)))?;
    let response = send("DELETE", path, request).await?;
    read_text("DELETE", path, response).await
}
