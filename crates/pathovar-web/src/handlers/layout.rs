//! Page shell and HTML helpers shared by the page handlers.

use pathovar_classifier::report::DISCLAIMER;

const STYLE: &str = r#"
    body { font-family: system-ui, sans-serif; background: #111418; color: #e6e6e6; margin: 0; }
    main { max-width: 760px; margin: 2rem auto; padding: 0 1rem; }
    .card { background: #1b1f24; border: 1px solid #2c323a; border-radius: 8px; padding: 1.25rem; margin-top: 1rem; }
    .alert { border-radius: 6px; padding: 0.75rem 1rem; margin-top: 1rem; }
    .alert-warning { background: #3b2f10; color: #f5d27a; }
    .alert-info { background: #10263b; color: #9cc8f5; }
    .badge { display: inline-block; padding: 0.25rem 0.6rem; border-radius: 4px; font-weight: 600; }
    .bg-success { background: #1f6f3f; }
    .bg-danger { background: #8a2222; }
    .bg-warning { background: #8a6a12; }
    .bg-secondary { background: #444b55; }
    dl { display: grid; grid-template-columns: 11rem 1fr; gap: 0.4rem 1rem; }
    dt { color: #9aa3ad; }
    input[type=text] { width: 100%; padding: 0.5rem; font-family: monospace; }
    pre { white-space: pre-wrap; font-size: 0.8rem; }
"#;

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the document shell. The disclaimer is always shown.
pub fn page(title: &str, body: &str) -> String {
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>pathovar — {}</title>
    <style>{}</style>
</head>
<body>
<main>
    <h1>🧬 pathovar</h1>
    <p>Simplified ACMG evidence aggregation from Ensembl VEP and ClinVar.</p>
    {}
    <div class="alert alert-info">{}</div>
</main>
</body>
</html>"#, escape_html(title), STYLE, body, DISCLAIMER)
}
