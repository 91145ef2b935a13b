//! Static HTML documentation page served at `/`.

use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>pullshield - Container Registry Badge API</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            line-height: 1.6;
            margin: 2rem;
        }
        h1 {
            color: #333;
        }
        a {
            color: #2496ed;
            text-decoration: none;
        }
        a:hover {
            text-decoration: underline;
        }
    </style>
</head>
<body>
    <h1>pullshield - Container Registry Badge API</h1>
    <p>Use the following endpoints:</p>
    <ul>
        <li><code>/api/:owner/:repo/:pkg</code> - Get repo package download stats.</li>
        <li><code>/api/:owner/:pkg</code> - Get user package download stats.</li>
        <li><code>/shield/:owner/:repo/:pkg</code> - Get a dynamic badge for repo package pulls.</li>
        <li><code>/shield/:owner/:pkg</code> - Get a dynamic badge for user package pulls.</li>
    </ul>
    <p>Examples:</p>
    <ul>
        <li><a href="/api/acme/widgets/img"><code>/api/acme/widgets/img</code></a> - Stats for the repo-scoped package page.</li>
        <li><a href="/api/acme/img"><code>/api/acme/img</code></a> - Stats for the user-scoped package page.</li>
        <li><a href="/shield/acme/widgets/img"><code>/shield/acme/widgets/img</code></a> - Badge for repo package pulls.</li>
        <li><a href="/shield/acme/img"><code>/shield/acme/img</code></a> - Badge for user package pulls.</li>
    </ul>
    <p>Append <code>?no-cache</code> to an <code>/api</code> URL to bypass the response cache.</p>
</body>
</html>
"#;
