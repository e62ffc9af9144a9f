//! Minimal markup-to-HTML renderer for generated copy.
//!
//! Supports `**bold**`, `*italic*`, `#`/`##`/`###` headings and `-`/`•`
//! bullets. Each line is classified once, with headings taking precedence
//! over bullets, and only the remainder of the line gets inline emphasis.
//! Runs of adjacent bullet lines share one `<ul>`; lines are joined with
//! `<br>`; a `\r` before a newline is dropped. Text is HTML-escaped
//! before any markup is inserted, so comparisons like `a < b` come out as
//! `a &lt; b`.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

enum Line<'a> {
    Heading(&'static str, &'a str),
    Item(&'a str),
    Text(&'a str),
}

impl Line<'_> {
    fn is_item(&self) -> bool {
        matches!(self, Self::Item(_))
    }
}

fn classify(line: &str) -> Line<'_> {
    const HEADINGS: [(&str, &str); 3] = [("### ", "h4"), ("## ", "h3"), ("# ", "h2")];
    for (prefix, tag) in HEADINGS {
        if let Some(rest) = line.strip_prefix(prefix) {
            return Line::Heading(tag, rest);
        }
    }
    match line.strip_prefix("- ").or_else(|| line.strip_prefix("• ")) {
        Some(rest) => Line::Item(rest),
        None => Line::Text(line),
    }
}

/// Render `text` to an HTML fragment. Empty input yields an empty string.
pub fn render_markdown(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let lines: Vec<Line<'_>> = text
        .split('\n')
        .map(|line| classify(line.strip_suffix('\r').unwrap_or(line)))
        .collect();
    let mut out = String::with_capacity(text.len() * 2);
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push_str("<br>");
        }
        match line {
            Line::Heading(tag, content) => {
                out.push_str(&format!("<{tag}>{}</{tag}>", inline(content)));
            }
            Line::Item(content) => {
                let opens_list = i == 0 || !lines[i - 1].is_item();
                let closes_list = !lines.get(i + 1).is_some_and(Line::is_item);
                if opens_list {
                    out.push_str("<ul>");
                }
                out.push_str(&format!("<li>{}</li>", inline(content)));
                if closes_list {
                    out.push_str("</ul>");
                }
            }
            Line::Text(content) => out.push_str(&inline(content)),
        }
    }
    out
}

fn inline(raw: &str) -> String {
    let escaped = escape_html(raw);
    let bold = wrap_pairs(&escaped, "**", "strong");
    wrap_pairs(&bold, "*", "em")
}

/// Wrap each left-to-right, non-overlapping `delim ... delim` pair in `tag`.
/// An unpaired trailing delimiter is left as-is.
fn wrap_pairs(text: &str, delim: &str, tag: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find(delim) {
        let after = &rest[open + delim.len()..];
        let Some(close) = after.find(delim) else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push_str(&format!("<{tag}>{}</{tag}>", &after[..close]));
        rest = &after[close + delim.len()..];
    }
    out.push_str(rest);
    out
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
