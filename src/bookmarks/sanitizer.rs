//! Output sanitization for untrusted free text.
//!
//! `<` and `>` are always escaped. `&` is escaped only when it does not
//! already start a character reference, so sanitizing twice is the same
//! as sanitizing once. Quotes pass through.

use std::sync::OnceLock;

use regex::Regex;

use super::model::{Bookmark, BookmarkResponse};

fn entity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);")
            .expect("entity pattern is valid")
    })
}

/// Escapes markup in `input`
pub fn sanitize_text(input: &str) -> String {
    if !input.contains(|c: char| matches!(c, '<' | '>' | '&')) {
        return input.to_string();
    }

    let mut output = String::with_capacity(input.len() + 16);
    for (idx, c) in input.char_indices() {
        match c {
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '&' if !entity_pattern().is_match(&input[idx..]) => output.push_str("&amp;"),
            c => output.push(c),
        }
    }
    output
}

/// Produces the client-facing shape of a bookmark
pub fn sanitize_bookmark(bookmark: &Bookmark) -> BookmarkResponse {
    BookmarkResponse::from(bookmark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_tag_escaped() {
        assert_eq!(
            sanitize_text(r#"Naughty <script>alert("xss");</script>"#),
            r#"Naughty &lt;script&gt;alert("xss");&lt;/script&gt;"#
        );
    }

    #[test]
    fn test_img_tag_escaped() {
        assert_eq!(
            sanitize_text(r#"Bad <img onerror="alert(1)">."#),
            r#"Bad &lt;img onerror="alert(1)"&gt;."#
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(sanitize_text("first bookmark"), "first bookmark");
    }

    #[test]
    fn test_bare_ampersand_escaped() {
        assert_eq!(sanitize_text("AT&T"), "AT&amp;T");
        assert_eq!(sanitize_text("a && b"), "a &amp;&amp; b");
    }

    #[test]
    fn test_existing_entities_kept() {
        assert_eq!(sanitize_text("&lt;b&gt; &#39; &#x27; &amp;"), "&lt;b&gt; &#39; &#x27; &amp;");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            r#"<script>alert("xss")</script>"#,
            "Tom & Jerry <3",
            "&&&;<<>>",
            "'single' \"double\"",
        ];
        for input in inputs {
            let once = sanitize_text(input);
            assert_eq!(sanitize_text(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_sanitize_bookmark_passes_through_id_url_rating() {
        let bookmark = Bookmark {
            id: 911,
            title: "<t>".to_string(),
            url: "yougotxssd.com/<x>".to_string(),
            description: "<d>".to_string(),
            rating: 5,
        };
        let response = sanitize_bookmark(&bookmark);
        assert_eq!(response.id, 911);
        assert_eq!(response.url, "yougotxssd.com/<x>");
        assert_eq!(response.rating, 5);
        assert_eq!(response.title, "&lt;t&gt;");
        assert_eq!(response.description, "&lt;d&gt;");
    }
}
