use axum::response::Html;

/// GET /
/// Serves the single interactive page. The form talks to the JSON API
/// under /api/v1/roadmaps; everything else is presentation.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
