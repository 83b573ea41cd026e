//! Type definitions for the DupLens web UI.
//!
//! This module contains the data structures exchanged with the backend API.
//! These types mirror the backend's JSON payloads and provide
//! serialization/deserialization support; unknown keys sent by the server
//! (for example `path` or `extension` on tree entries) are ignored.

use serde::{Deserialize, Serialize};

/// Kind of an entry in a scanned directory tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// One entry (file or directory) in a scanned directory tree.
///
/// The whole tree arrives in a single `/api/scan` response and is immutable
/// on the client; expand/collapse state lives in the view, not here.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FileNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub size: u64,
    /// Populated for directories only; files omit the key entirely.
    #[serde(default)]
    pub children: Vec<FileNode>,
}

impl FileNode {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}

/// A set of files sharing identical content, keyed by a content fingerprint.
///
/// `explanation` starts out absent and is filled in-place by a later
/// `/api/duplicates/explain` call, matched by `hash`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DuplicateGroup {
    pub hash: String,
    /// Size of a single copy, in bytes.
    pub size: u64,
    pub paths: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl DuplicateGroup {
    /// Bytes reclaimable by removing all but one copy. Derived here rather
    /// than trusted from the wire; a group with a single path wastes nothing.
    pub fn wasted(&self) -> u64 {
        self.size * (self.paths.len() as u64).saturating_sub(1)
    }
}

/// Response body of `/api/duplicates/explain`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ExplainResponse {
    #[serde(default)]
    pub groups: Vec<ExplainedGroup>,
}

/// One explained group out of the explain response. The server echoes the
/// full group; only the fingerprint and the generated text matter here.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ExplainedGroup {
    pub hash: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Response body of `/api/delete`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DeleteResponse {
    #[serde(default)]
    pub deleted: Vec<String>,
    #[serde(default)]
    pub errors: Vec<DeleteError>,
    /// Number of files actually removed.
    #[serde(default)]
    pub count: u64,
}

/// Per-file failure entry of a delete request.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DeleteError {
    pub file: String,
    pub error: String,
}
