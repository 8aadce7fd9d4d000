use std::path::Path;

/// Content type a response carries when nothing more specific applies.
pub const FALLBACK_CONTENT_TYPE: &str = "text/html";

/// Guesses a Content-Type from the file extension.
///
/// Returns `None` for unknown or missing extensions, in which case the
/// response keeps the server's default Content-Type.
///
/// # Example
///
/// ```
/// # use static_server::http::mime::guess_content_type;
/// assert_eq!(guess_content_type("notes.txt"), Some("text/plain"));
/// assert_eq!(guess_content_type("Makefile"), None);
/// ```
pub fn guess_content_type(path: impl AsRef<Path>) -> Option<&'static str> {
    mime_guess::from_path(path).first_raw()
}
