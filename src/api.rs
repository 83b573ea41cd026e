use serde::Serialize;

use crate::types::*;

pub const BASE: &str = ""; // use same-origin relative URLs

fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

fn map_net(e: reqwasm::Error) -> String {
    format!("network error: {}", e)
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanRequest {
    pub path: String,
}

/// Scan a directory tree. Returns the root node with all children inlined.
pub async fn scan(path: &str) -> Result<FileNode, String> {
    let req = ScanRequest { path: path.to_string() };
    let resp = reqwasm::http::Request::post(&url("/api/scan"))
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(&req).unwrap())
        .send()
        .await
        .map_err(map_net)?;
    if !resp.ok() {
        return Err(resp.text().await.unwrap_or_else(|_| "HTTP error".into()));
    }
    resp.json().await.map_err(map_net)
}

/// Run a duplicate check below `path`. The response is a bare array of
/// groups, sorted by the server with the largest wasted space first.
pub async fn check_duplicates(path: &str) -> Result<Vec<DuplicateGroup>, String> {
    let req = ScanRequest { path: path.to_string() };
    let resp = reqwasm::http::Request::post(&url("/api/duplicates"))
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(&req).unwrap())
        .send()
        .await
        .map_err(map_net)?;
    if !resp.ok() {
        return Err(resp.text().await.unwrap_or_else(|_| "HTTP error".into()));
    }
    resp.json().await.map_err(map_net)
}

#[derive(Debug, Clone, Serialize)]
pub struct ExplainRequest {
    pub path: String,
    /// Locale code the explanations should be written in ("en" or "ja").
    pub lang: String,
    /// Cap on how many groups the server explains, largest waste first.
    pub max_groups: u32,
}

pub async fn explain_duplicates(req: &ExplainRequest) -> Result<ExplainResponse, String> {
    let resp = reqwasm::http::Request::post(&url("/api/duplicates/explain"))
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(req).unwrap())
        .send()
        .await
        .map_err(map_net)?;
    if !resp.ok() {
        return Err(resp.text().await.unwrap_or_else(|_| "HTTP error".into()));
    }
    resp.json().await.map_err(map_net)
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteRequest {
    pub files: Vec<String>,
}

pub async fn delete_files(files: Vec<String>) -> Result<DeleteResponse, String> {
    let req = DeleteRequest { files };
    let resp = reqwasm::http::Request::post(&url("/api/delete"))
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(&req).unwrap())
        .send()
        .await
        .map_err(map_net)?;
    if !resp.ok() {
        return Err(resp.text().await.unwrap_or_else(|_| "HTTP error".into()));
    }
    resp.json().await.map_err(map_net)
}
