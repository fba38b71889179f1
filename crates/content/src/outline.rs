//! Parser for the markdown question outlines that topics are browsed through.
//!
//! An outline is a flat markdown list in which each entry looks like
//! `- [Question text](../answers/<topic>/<slug>.md)` or links out to a video.

/// Where an outline entry's answer lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerLink {
    /// Local answer article, addressed by slug under the topic's answer dir.
    File(String),
    /// External resource (YouTube); opened out-of-app.
    External(String),
    /// The entry has no answer attached.
    None,
}

/// One parsed entry of a topic's question outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub text: String,
    pub link: AnswerLink,
}

impl OutlineEntry {
    /// Slug used for routing to this entry's answer page.
    #[must_use]
    pub fn slug(&self) -> Option<String> {
        match &self.link {
            AnswerLink::File(path) => {
                Some(path.rsplit('/').next().unwrap_or(path).to_string())
            }
            AnswerLink::External(_) | AnswerLink::None => None,
        }
    }

    #[must_use]
    pub fn has_answer_file(&self) -> bool {
        matches!(self.link, AnswerLink::File(_))
    }
}

/// Parses a markdown outline into ordered entries.
///
/// Lines that are not `- [text](link)` items are ignored; the order of the
/// source file is preserved.
#[must_use]
pub fn parse_outline(content: &str) -> Vec<OutlineEntry> {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<OutlineEntry> {
    let rest = line.strip_prefix("- ").or_else(|| line.strip_prefix("* "))?;
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('[')?;
    let close = rest.find(']')?;
    let text = rest[..close].trim();
    if text.is_empty() {
        return None;
    }
    let after = rest[close + 1..].strip_prefix('(')?;
    let end = after.find(')')?;
    let link = after[..end].trim();

    Some(OutlineEntry {
        text: text.to_string(),
        link: classify_link(link),
    })
}

fn classify_link(link: &str) -> AnswerLink {
    if link.is_empty() {
        return AnswerLink::None;
    }
    if link.starts_with("https://youtu.be") || link.starts_with("https://www.youtube.com") {
        return AnswerLink::External(link.to_string());
    }
    let path = link
        .strip_prefix("../answers/")
        .unwrap_or(link)
        .strip_suffix(".md")
        .map(ToString::to_string);
    match path {
        Some(path) if !path.is_empty() => AnswerLink::File(path),
        _ => AnswerLink::None,
    }
}

/// Turns question text into a URL slug: lowercase, word characters only,
/// whitespace and hyphen runs collapsed to single hyphens.
#[must_use]
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let filtered: String = lowered
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch == '_' {
                ch
            } else if ch.is_whitespace() || ch == '-' {
                ' '
            } else {
                '\u{0}'
            }
        })
        .filter(|ch| *ch != '\u{0}')
        .collect();

    let mut slug = String::with_capacity(filtered.len());
    let mut pending_gap = false;
    for ch in filtered.chars() {
        if ch == ' ' {
            pending_gap = !slug.is_empty();
        } else {
            if pending_gap {
                slug.push('-');
                pending_gap = false;
            }
            slug.push(ch);
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_answer_file_entries() {
        let md = "# CSS\n\n- [What is flexbox?](../answers/css/what-is-flexbox.md)\n";
        let entries = parse_outline(md);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "What is flexbox?");
        assert_eq!(
            entries[0].link,
            AnswerLink::File("css/what-is-flexbox".into())
        );
        assert_eq!(entries[0].slug().as_deref(), Some("what-is-flexbox"));
    }

    #[test]
    fn classifies_youtube_links_as_external() {
        let md = "- [Event loop talk](https://youtu.be/8aGhZQkoFbQ)\n\
                  - [Another talk](https://www.youtube.com/watch?v=abc)\n";
        let entries = parse_outline(md);
        assert!(matches!(entries[0].link, AnswerLink::External(_)));
        assert!(matches!(entries[1].link, AnswerLink::External(_)));
        assert_eq!(entries[0].slug(), None);
    }

    #[test]
    fn skips_non_list_lines_and_keeps_order() {
        let md = "Intro paragraph\n\
                  - [First](../answers/js/first.md)\n\
                  plain line\n\
                  * [Second](../answers/js/second.md)\n";
        let entries = parse_outline(md);
        let texts: Vec<_> = entries.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["First", "Second"]);
    }

    #[test]
    fn slugify_normalizes_text() {
        assert_eq!(slugify("What is the DOM?"), "what-is-the-dom");
        assert_eq!(slugify("Async / Await -- basics"), "async-await-basics");
        assert_eq!(slugify("  CSS  Grid  "), "css-grid");
    }
}
