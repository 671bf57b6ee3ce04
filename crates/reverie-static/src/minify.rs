//! HTML tidy transform.
//!
//! A post-render hook applied once per output file. Only paths ending in
//! `.html` are touched, and the transform is deliberately gentle: it trims
//! trailing whitespace, collapses runs of blank lines, and strips comments
//! only when asked to. Tags and attributes are never rewritten, and the
//! contents of `<pre>`, `<textarea>`, `<script>` and `<style>` blocks pass
//! through verbatim.

use std::path::Path;

/// Options for the transform.
#[derive(Debug, Clone, Copy)]
pub struct HtmlMinifyOptions {
    /// Strip HTML comments from the output.
    pub remove_comments: bool,
}

impl Default for HtmlMinifyOptions {
    fn default() -> Self {
        Self {
            remove_comments: false,
        }
    }
}

// Blocks whose content is whitespace-sensitive.
const PROTECTED: [(&str, &str); 4] = [
    ("<pre", "</pre>"),
    ("<textarea", "</textarea>"),
    ("<script", "</script>"),
    ("<style", "</style>"),
];

/// Tidy rendered output when it is an HTML file; anything else passes
/// through unchanged.
pub fn transform(content: String, output_path: &Path, options: HtmlMinifyOptions) -> String {
    let is_html = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("html"))
        .unwrap_or(false);

    if !is_html {
        return content;
    }

    let mut out = String::with_capacity(content.len());
    let mut awaiting_close: Option<&'static str> = None;
    let mut in_comment = false;
    let mut blank_run = 0usize;

    for line in content.lines() {
        if let Some(close) = awaiting_close {
            out.push_str(line);
            out.push('\n');
            if line.to_ascii_lowercase().contains(close) {
                awaiting_close = None;
            }
            continue;
        }

        let line = if options.remove_comments {
            let (stripped, still_open) = strip_comments(line, in_comment);
            in_comment = still_open;
            stripped
        } else {
            line.to_string()
        };

        let lower = line.to_ascii_lowercase();
        for (open, close) in PROTECTED {
            if opens_block(&lower, open) && !lower.contains(close) {
                awaiting_close = Some(close);
                break;
            }
        }

        if awaiting_close.is_some() {
            // Protected content may start on the opening line already.
            out.push_str(&line);
            out.push('\n');
            blank_run = 0;
            continue;
        }

        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(trimmed);
        out.push('\n');
    }

    out
}

// `<pre` must be a tag start, not a prefix of a longer tag name.
fn opens_block(lower_line: &str, open: &str) -> bool {
    lower_line.find(open).is_some_and(|i| {
        lower_line[i + open.len()..]
            .chars()
            .next()
            .map_or(true, |c| c == '>' || c.is_ascii_whitespace())
    })
}

/// Remove `<!-- ... -->` spans from one line, carrying the open-comment
/// state across lines.
fn strip_comments(line: &str, mut in_comment: bool) -> (String, bool) {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    loop {
        if rest.is_empty() {
            break;
        }
        if in_comment {
            match rest.find("-->") {
                Some(i) => {
                    rest = &rest[i + 3..];
                    in_comment = false;
                }
                None => break,
            }
        } else {
            match rest.find("<!--") {
                Some(i) => {
                    out.push_str(&rest[..i]);
                    rest = &rest[i + 4..];
                    in_comment = true;
                }
                None => {
                    out.push_str(rest);
                    break;
                }
            }
        }
    }

    (out, in_comment)
}
