//! Static file serving for GET requests.

use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use tracing::debug;
use url::Url;

use crate::http::mime::guess_content_type;
use crate::http::response::{Headers, Response, ResponseBuilder, StatusCode};

/// Base the request target is resolved against.
const TARGET_BASE: &str = "http://localhost/";

/// Serves regular files below a root directory.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
    index_file: String,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>, index_file: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            index_file: index_file.into(),
        }
    }

    /// Maps a request target to a path under the root.
    ///
    /// The target is normalized as a URL path: query and fragment are
    /// dropped and `.`/`..` segments (including percent-encoded ones) are
    /// resolved, then the path is percent-decoded. Leading and trailing
    /// slashes are stripped and an empty path becomes the index file.
    /// Returns `None` for targets that cannot be mapped or that would
    /// leave the root.
    pub fn resolve(&self, target: &str) -> Option<PathBuf> {
        let path = target.split(['?', '#']).next().unwrap_or_default();
        let mut url = Url::parse(TARGET_BASE).ok()?;
        url.set_path(path);
        let decoded = urlencoding::decode(url.path()).ok()?;

        let relative = decoded.trim_matches('/');
        let relative = if relative.is_empty() {
            self.index_file.as_str()
        } else {
            relative
        };

        let relative = Path::new(relative);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return None;
        }

        Some(self.root.join(relative))
    }

    /// Answers a GET for `target`.
    ///
    /// 200 with the whole file when it exists and is not a directory,
    /// otherwise 404. Only a failed read of an existing file is an error.
    pub async fn get(&self, target: &str, defaults: &Headers) -> anyhow::Result<Response> {
        let Some(path) = self.resolve(target) else {
            debug!(uri = target, "Unmappable request target");
            return Ok(Response::not_found(defaults));
        };

        let is_file = match tokio::fs::metadata(&path).await {
            Ok(meta) => !meta.is_dir(),
            Err(_) => false,
        };

        if !is_file {
            debug!(path = %path.display(), "No file to serve");
            return Ok(Response::not_found(defaults));
        }

        let body = tokio::fs::read(&path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;

        // Unknown extensions keep the default Content-Type
        let mut builder = ResponseBuilder::new(StatusCode::Ok, defaults);
        if let Some(content_type) = guess_content_type(&path) {
            builder = builder.header("Content-Type", content_type);
        }

        Ok(builder.body(body).build())
    }
}
