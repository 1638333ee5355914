//! Plain-text rendering of history records and payloads.

use termfolio_terminal::HistoryRecord;
use termfolio_types::{Payload, RichContent};

/// Echo line for a command, e.g. `user@anonymous~$: skills`.
pub fn prompt_line(prompt: &str, input: &str) -> String {
    format!("{prompt} {input}")
}

/// Hint shown while a completion is available.
pub fn suggestion_line(suggestion: &str) -> String {
    format!("Pressione Tab para completar: {suggestion}")
}

/// Lines for one history record: the echoed prompt, then the output.
pub fn render_record(prompt: &str, record: &HistoryRecord) -> Vec<String> {
    let mut lines = vec![prompt_line(prompt, &record.input)];
    lines.extend(render_payload(&record.output));
    lines
}

pub fn render_payload(payload: &Payload) -> Vec<String> {
    match payload {
        Payload::Text(text) => text.lines().map(str::to_string).collect(),
        Payload::Rich(rich) => render_rich(rich),
    }
}

fn render_rich(rich: &RichContent) -> Vec<String> {
    match rich {
        RichContent::Profile {
            title,
            fields,
            motto,
            image,
        } => {
            let mut out = vec![title.clone()];
            for f in fields {
                out.push(format!("{}: {}", f.label, f.value));
            }
            if let Some(m) = motto {
                out.push(format!("Motto: {m}"));
            }
            if let Some(img) = image {
                out.push(format!("[{}] {}", img.alt, img.src));
            }
            out
        },
        RichContent::Links { items } => items
            .iter()
            .map(|l| format!("  * {} <{}>", l.name, l.url))
            .collect(),
        RichContent::Contacts { items } => items
            .iter()
            .map(|l| format!("{} -{}", l.name, l.url))
            .collect(),
    }
}
