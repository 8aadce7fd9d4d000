//! Directory listing page written once at startup.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

/// Names of the top-level regular files in `dir`, sorted.
///
/// Subdirectories are skipped. Symlinks count if they point at a file.
pub async fn list_files(dir: &Path) -> anyhow::Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("failed to list {}", dir.display()))?;

    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let is_file = tokio::fs::metadata(entry.path())
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);

        if is_file {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    names.sort();
    Ok(names)
}

pub fn render_listing(names: &[String]) -> String {
    let mut page = String::from(
        "<!DOCTYPE html> <html><head></head><body><h1>Server Directory</h1>",
    );

    for name in names {
        // `?`, `#` and `%` in a name must not reach the target parser raw
        let href = escape_html(&urlencoding::encode(name));
        let text = escape_html(name);
        page.push_str(&format!("<div><a href=\"{href}\">{text}</a></div>"));
    }

    page.push_str("</body></html>");
    page
}

/// Lists `dir` and writes the page to `dir/index_file`, replacing any
/// existing file. Files are enumerated before the page is written.
pub async fn write_listing_page(dir: &Path, index_file: &str) -> anyhow::Result<PathBuf> {
    let target = dir.join(index_file);
    info!("Generating directory page at {}", target.display());

    let names = list_files(dir).await?;
    tokio::fs::write(&target, render_listing(&names))
        .await
        .with_context(|| format!("failed to write {}", target.display()))?;

    info!(files = names.len(), "Directory page written");
    Ok(target)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
