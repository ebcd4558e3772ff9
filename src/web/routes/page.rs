use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::web::WebState;

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{ title }}</title>
<meta name="description" content="{{ description }}">
</head>
<body>
<main>
<h1>Want to decline someone with style?</h1>
<p>This is The NopeAPI <span class="badge">v1.0</span></p>
<p><a href="/api/nope">/api/nope</a></p>
</main>
</body>
</html>
"#
)]
struct IndexPage<'a> {
    title: &'a str,
    description: &'a str,
}

/// `GET /`: landing page with metadata from a fresh phrase.
pub async fn page_handler(State(state): State<WebState>) -> Response {
    let metadata = state.metadata.execute().await;
    let page = IndexPage {
        title: &metadata.title,
        description: &metadata.description,
    };

    match page.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!(error = %err, "failed to render landing page");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}
