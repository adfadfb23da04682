//! Plain-text extraction from raw page markup.
//!
//! Best-effort by construction: the HTML5 parser never fails on malformed
//! input, it just builds the tree it can.

use scraper::{Html, Selector};

/// Elements that never contain lyric content. Text inside any of these
/// subtrees is dropped.
const SKIP_TAGS: &[&str] = &[
    "script", "style", "noscript", "nav", "header", "footer", "aside", "iframe", "form", "button",
    "svg", "head",
];

/// Strip non-content markup and return the human-visible text, one fragment
/// per line.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let body_selector = Selector::parse("body").unwrap();
    let root = document
        .select(&body_selector)
        .next()
        .unwrap_or_else(|| document.root_element());

    let mut fragments: Vec<String> = Vec::new();

    for node in root.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let inside_boilerplate = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| SKIP_TAGS.contains(&el.name()))
        });
        if inside_boilerplate {
            continue;
        }

        // One fragment per line, the way the page breaks its text; collapse
        // intra-fragment whitespace runs left by the markup.
        for line in text.lines() {
            let line = line.split_whitespace().collect::<Vec<_>>().join(" ");
            if !line.is_empty() {
                fragments.push(line);
            }
        }
    }

    fragments.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_scripts_and_styles() {
        let html = r#"
            <html><body>
                <script>var x = 1;</script>
                <style>.a { color: red; }</style>
                <p>Is this the real life?</p>
                <p>Is this just fantasy?</p>
            </body></html>
        "#;

        let text = extract_text(html);
        assert_eq!(text, "Is this the real life?\nIs this just fantasy?");
    }

    #[test]
    fn test_strips_navigation_chrome() {
        let html = r#"
            <html><body>
                <header><h1>LyricsSite.com</h1></header>
                <nav><a href="/">Home</a><a href="/top">Top 100</a></nav>
                <div class="lyrics">Caught in a landslide</div>
                <footer>Copyright 2024</footer>
            </body></html>
        "#;

        let text = extract_text(html);
        assert_eq!(text, "Caught in a landslide");
    }

    #[test]
    fn test_nested_boilerplate_is_skipped() {
        let html = r#"
            <body>
                <nav><div><span>Menu item</span></div></nav>
                <p>No escape from reality</p>
            </body>
        "#;

        assert_eq!(extract_text(html), "No escape from reality");
    }

    #[test]
    fn test_malformed_markup_does_not_panic() {
        let html = "<div><p>Open your eyes<div></span></html><p>Look up to the skies";
        let text = extract_text(html);

        assert!(text.contains("Open your eyes"));
        assert!(text.contains("Look up to the skies"));
    }

    #[test]
    fn test_whitespace_collapse() {
        let html = "<body><p>  Mama,   just\n   killed a man  </p></body>";
        assert_eq!(extract_text(html), "Mama, just\nkilled a man");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_text(""), "");
    }
}
