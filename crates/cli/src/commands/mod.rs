//! Command implementations and shared plumbing.

pub mod account;
pub mod auth;
pub mod catalog;
pub mod orders;

use std::path::PathBuf;

use thiserror::Error;

use mangust_client::{ApiClient, ApiError, ClientConfig, ConfigError, Session};
use mangust_core::{Page, PageItem, Pager};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The backend call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Session store I/O failed.
    #[error("Session store error: {0}")]
    SessionStore(#[from] std::io::Error),

    /// Session snapshot could not be serialized.
    #[error("Session encode error: {0}")]
    SessionEncode(#[from] serde_json::Error),

    /// A command needing authentication ran without a stored session.
    #[error("Not logged in - run `mangust login` first")]
    NotLoggedIn,

    /// A flag value could not be interpreted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Where the session snapshot lives.
///
/// `MANGUST_SESSION_FILE` overrides; otherwise `$HOME/.mangust-session.json`,
/// falling back to the working directory when `HOME` is unset.
pub fn session_path() -> PathBuf {
    if let Some(path) = std::env::var_os("MANGUST_SESSION_FILE") {
        return PathBuf::from(path);
    }
    std::env::var_os("HOME").map_or_else(
        || PathBuf::from(".mangust-session.json"),
        |home| PathBuf::from(home).join(".mangust-session.json"),
    )
}

/// Load the stored session, if any. Corrupt stores read as logged out.
pub fn load_session() -> Option<Session> {
    let raw = std::fs::read_to_string(session_path()).ok()?;
    Session::from_json(&raw)
}

/// Persist the session snapshot.
pub fn store_session(session: &Session) -> Result<(), CliError> {
    std::fs::write(session_path(), session.to_json()?)?;
    Ok(())
}

/// Build a client from the environment, attaching the stored session when
/// present.
pub fn client() -> Result<ApiClient, CliError> {
    let config = ClientConfig::from_env()?;
    let client = match load_session() {
        Some(session) => ApiClient::with_session(&config, &session)?,
        None => ApiClient::new(&config)?,
    };
    Ok(client)
}

/// Build a client from the environment, requiring a stored session.
pub fn authenticated_client() -> Result<ApiClient, CliError> {
    let config = ClientConfig::from_env()?;
    let session = load_session().ok_or(CliError::NotLoggedIn)?;
    Ok(ApiClient::with_session(&config, &session)?)
}

/// Print the navigation footer for a fetched page.
///
/// Renders the same derived state a pagination bar would: the page-number
/// window with ellipses, and whether forward/backward navigation is open.
pub fn print_page_footer<T>(requested_page: u32, limit: u32, page: &Page<T>) {
    let mut pager = Pager::new(limit);
    // Unknown total at this point, so any requested page is accepted.
    let _ = pager.page_change(requested_page);
    pager.set_total_items(page.total);

    let strip: Vec<String> = pager
        .window()
        .iter()
        .map(|item| match item {
            PageItem::Page(n) if *n == pager.page() => format!("[{n}]"),
            PageItem::Page(n) => n.to_string(),
            PageItem::Ellipsis => "...".to_string(),
        })
        .collect();

    let total = page
        .total
        .map_or_else(|| "unknown".to_string(), |t| t.to_string());

    println!();
    if strip.is_empty() {
        println!(
            "page {} ({} items, total {total})",
            pager.page(),
            page.items.len()
        );
    } else {
        println!(
            "page {} of {} - {} ({} items, total {total})",
            pager.page(),
            pager.page_count().unwrap_or(0),
            strip.join(" "),
            page.items.len()
        );
    }
    println!(
        "prev: {}  next: {}",
        if pager.can_go_prev() { "yes" } else { "no" },
        if pager.can_go_next() { "yes" } else { "no" }
    );
}
