use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html(concat!(
        "<!doctype html><html><head><title>saavnfetch</title></head><body>",
        "<h2>saavnfetch gateway</h2><ul>",
        "<li><code>GET /search?q=</code></li>",
        "<li><code>POST /add_favorite</code>, <code>POST /remove_favorite</code>, <code>GET /get_favorites</code></li>",
        "<li><code>POST /add_history</code>, <code>GET /get_history</code></li>",
        "<li><code>GET /health</code></li>",
        "</ul></body></html>"
    ))
}
