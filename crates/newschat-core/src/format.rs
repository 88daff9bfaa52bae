//! Text shaping for the message list: assistant reply rendering and
//! link detection.

use std::sync::LazyLock;

use regex::Regex;
use newschat_types::reply::AssistantReply;

pub const EMPTY_ANSWER: &str = "I received your message but got an empty response.";
const SOURCES_HEADER: &str = "\n\n**Sources:**\n";

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s]+").expect("static regex"));

/// Build the display text for an assistant reply.
///
/// Citation numbering follows the received order. Citations without a
/// title are not listed but still use up their number.
pub fn format_reply(reply: &AssistantReply) -> String {
    let mut text = if reply.answer.is_empty() {
        EMPTY_ANSWER.to_string()
    } else {
        reply.answer.clone()
    };

    if reply.citations.is_empty() {
        return text;
    }

    text.push_str(SOURCES_HEADER);
    for (index, citation) in reply.citations.iter().enumerate() {
        let Some(title) = &citation.title else { continue };
        text.push_str(&format!("\n{}. {}", index + 1, title));
        if let Some(url) = &citation.url {
            text.push_str(&format!(" ({})", url));
        }
    }
    text
}

/// A run of message text, either plain or a detected link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Link(&'a str),
}

/// Split a single line into plain and link segments, in order.
pub fn segments(line: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in URL_RE.find_iter(line) {
        if m.start() > last {
            out.push(Segment::Text(&line[last..m.start()]));
        }
        out.push(Segment::Link(m.as_str()));
        last = m.end();
    }
    if last < line.len() {
        out.push(Segment::Text(&line[last..]));
    }
    out
}

/// Message body as renderable paragraphs: one per non-blank line.
pub fn paragraphs(content: &str) -> Vec<Vec<Segment<'_>>> {
    content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(segments)
        .collect()
}
