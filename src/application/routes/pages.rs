use axum::response::Html;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Pixmint</title></head>
<body>
    <h1>AI Generation API</h1>

    <h2>Image Generation</h2>
    <p>Use: <code>/api/image?prompt=your_prompt_here</code></p>
    <p>Example: <a href="/api/image?prompt=cute cat">/api/image?prompt=cute cat</a></p>
    <p>Generated images are served from <code>/cdn/images/&lt;id&gt;.png</code>.</p>

    <h2>Text Generation</h2>
    <p>Use: <code>/api/ai/openai?prompt=your_prompt_here</code></p>
    <p>Example: <a href="/api/ai/openai?prompt=Write a short poem about coding">/api/ai/openai?prompt=Write a short poem about coding</a></p>
</body>
</html>
"#;

/// `GET /` — static informational page listing the available endpoints.
pub(crate) async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
