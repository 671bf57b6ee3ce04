//! Markdown rendering.
//!
//! Renders Markdown to HTML the way the original site expects it: raw HTML
//! passes through, single newlines become hard breaks, bare URLs become
//! links, and every heading gets an id plus a `#` permalink anchor.

use pulldown_cmark::{html, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd};

/// Render a Markdown body to HTML.
///
/// The rendering configuration is fixed; there is no runtime switch.
pub fn render_markdown(source: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(source, options);

    let mut events: Vec<Event> = Vec::new();
    let mut in_code_block = false;
    let mut in_link = false;

    // Events between a heading's start and end are buffered so the open tag
    // can carry an id derived from the heading's plain text.
    let mut heading: Option<(u8, Vec<Event>, String)> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                heading = Some((level as u8, Vec::new(), String::new()));
            }

            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, inner, text)) = heading.take() {
                    let id = slugify(&text);
                    events.push(Event::Html(CowStr::from(format!(
                        "<h{level} id=\"{id}\">"
                    ))));
                    events.extend(inner);
                    events.push(Event::Html(CowStr::from(format!(
                        " <a class=\"direct-link\" href=\"#{id}\" aria-hidden=\"true\">#</a></h{level}>"
                    ))));
                }
            }

            Event::Start(Tag::CodeBlock(_)) => {
                in_code_block = true;
                push(&mut events, &mut heading, event);
            }

            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                push(&mut events, &mut heading, event);
            }

            Event::Start(Tag::Link { .. }) => {
                in_link = true;
                push(&mut events, &mut heading, event);
            }

            Event::End(TagEnd::Link) => {
                in_link = false;
                push(&mut events, &mut heading, event);
            }

            // Newline-sensitive mode: a single newline renders as <br>.
            Event::SoftBreak if !in_code_block => {
                push(&mut events, &mut heading, Event::HardBreak);
            }

            Event::Text(text) if !in_code_block => {
                if let Some((_, _, plain)) = heading.as_mut() {
                    plain.push_str(&text);
                }
                if in_link {
                    push(&mut events, &mut heading, Event::Text(text));
                } else {
                    for ev in autolink(&text) {
                        push(&mut events, &mut heading, ev);
                    }
                }
            }

            Event::Code(ref code) => {
                if let Some((_, _, plain)) = heading.as_mut() {
                    plain.push_str(code);
                }
                push(&mut events, &mut heading, event);
            }

            other => push(&mut events, &mut heading, other),
        }
    }

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    out
}

fn push<'a>(
    events: &mut Vec<Event<'a>>,
    heading: &mut Option<(u8, Vec<Event<'a>>, String)>,
    event: Event<'a>,
) {
    match heading {
        Some((_, inner, _)) => inner.push(event),
        None => events.push(event),
    }
}

/// Split a text run into events, turning bare `http(s)://` URLs into links.
fn autolink(text: &str) -> Vec<Event<'static>> {
    let mut events = Vec::new();
    let mut rest = text;

    loop {
        let start = match (rest.find("http://"), rest.find("https://")) {
            (Some(h), Some(s)) => h.min(s),
            (Some(h), None) => h,
            (None, Some(s)) => s,
            (None, None) => break,
        };

        let tail = &rest[start..];
        let end = tail
            .find(|c: char| c.is_whitespace() || matches!(c, '<' | '>' | '"' | '\''))
            .unwrap_or(tail.len());
        let url = tail[..end].trim_end_matches(['.', ',', ';', ':', '!', '?', ')']);

        // "http://" alone is not a link worth making.
        if url.len() <= "https://".len() {
            events.push(Event::Text(CowStr::from(rest[..start + end].to_string())));
            rest = &rest[start + end..];
            continue;
        }

        if start > 0 {
            events.push(Event::Text(CowStr::from(rest[..start].to_string())));
        }

        events.push(Event::Start(Tag::Link {
            link_type: LinkType::Autolink,
            dest_url: CowStr::from(url.to_string()),
            title: CowStr::Borrowed(""),
            id: CowStr::Borrowed(""),
        }));
        events.push(Event::Text(CowStr::from(url.to_string())));
        events.push(Event::End(TagEnd::Link));

        rest = &rest[start + url.len()..];
    }

    if !rest.is_empty() {
        events.push(Event::Text(CowStr::from(rest.to_string())));
    }

    events
}

/// Convert heading text to a URL-safe slug.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|c| *c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
