//! Mapping of marked-up documents to HTML.

/// Maps a marked-up document to an HTML fragment.
///
/// All text is entity-escaped first, then `**…**` pairs become
/// `<strong>` elements and newlines become `<br>` tags. An unbalanced
/// trailing marker is closed to keep the fragment well-formed.
#[must_use]
pub fn to_html(text: &str) -> String {
    let parts: Vec<&str> = text.split("**").collect();

    let mut out = String::with_capacity(text.len());
    for (i, part) in parts.iter().enumerate() {
        out.push_str(&escape(part));
        if i + 1 < parts.len() {
            out.push_str(if i % 2 == 0 { "<strong>" } else { "</strong>" });
        }
    }
    if parts.len() % 2 == 0 {
        out.push_str("</strong>");
    }

    out.replace('\n', "<br>\n")
}

/// Escapes markup-significant characters of the provided text.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

#[cfg(test)]
mod spec {
    use super::{escape, to_html};

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape("<b>R$ 5 & \"dez\"</b>"),
            "&lt;b&gt;R$ 5 &amp; &quot;dez&quot;&lt;/b&gt;",
        );
    }

    #[test]
    fn maps_markers_to_strong_elements() {
        assert_eq!(
            to_html("**CONTRATANTE:** Maria"),
            "<strong>CONTRATANTE:</strong> Maria",
        );
    }

    #[test]
    fn maps_newlines_to_breaks() {
        assert_eq!(to_html("a\n\nb"), "a<br>\n<br>\nb");
    }

    #[test]
    fn closes_unbalanced_markers() {
        assert_eq!(to_html("a **b"), "a <strong>b</strong>");
    }

    #[test]
    fn escapes_before_mapping() {
        assert_eq!(
            to_html("**<script>**"),
            "<strong>&lt;script&gt;</strong>",
        );
    }
}
