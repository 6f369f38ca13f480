//! Readable text extraction from HTML documents

use scraper::{Html, Selector};

/// Elements whose text is never shown to a reader
const HIDDEN_ELEMENTS: &[&str] = &["head", "script", "style", "noscript", "template"];

/// Extract the readable text of an HTML document
///
/// Paragraph text is preferred; pages without any `<p>` content fall back to
/// all visible text. Runs of whitespace collapse to one space and the result
/// is cut to at most `max_chars` characters.
pub fn readable_text(html: &str, max_chars: usize) -> String {
    let document = Html::parse_document(html);

    let mut text = paragraph_text(&document);
    if text.is_empty() {
        text = visible_text(&document);
    }

    truncate_chars(text, max_chars)
}

fn paragraph_text(document: &Html) -> String {
    let Ok(selector) = Selector::parse("p") else {
        return String::new();
    };

    let paragraphs: Vec<String> = document
        .select(&selector)
        .map(|p| normalize_whitespace(&p.text().collect::<String>()))
        .filter(|p| !p.is_empty())
        .collect();

    paragraphs.join(" ")
}

fn visible_text(document: &Html) -> String {
    let mut raw = String::new();

    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
        });
        if !hidden {
            raw.push_str(text);
            raw.push(' ');
        }
    }

    normalize_whitespace(&raw)
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_chars(text: String, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text,
    }
}
