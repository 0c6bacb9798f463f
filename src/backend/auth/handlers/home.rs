/**
 * Welcome Handler
 *
 * `GET /` answers with a fixed welcome text, with or without a session.
 */

/// Body of the welcome page
pub const WELCOME_MESSAGE: &str = "Welcome";

pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}
