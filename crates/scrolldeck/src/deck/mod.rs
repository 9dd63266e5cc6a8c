pub mod splitter;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct Deck {
    pub meta: DeckMeta,
    pub slides: Vec<SlideContent>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeckMeta {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideContent {
    /// Text of the first heading, if any.
    pub title: Option<String>,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
    Bullet(String),
    Code(String),
}

pub fn load(path: &Path) -> Result<Deck> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let deck = parse(&content);
    debug!(path = %path.display(), slides = deck.slides.len(), "loaded deck");
    Ok(deck)
}

pub fn parse(content: &str) -> Deck {
    let (meta, body) = split_frontmatter(content);
    let slides = splitter::split(body)
        .iter()
        .map(|raw| parse_slide(raw))
        .collect();
    Deck { meta, slides }
}

/// Separate a leading `---` fenced YAML block from the body. A block that
/// does not parse is kept as body text.
fn split_frontmatter(content: &str) -> (DeckMeta, &str) {
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (DeckMeta::default(), content);
    };
    let Some(end) = rest.find("\n---") else {
        return (DeckMeta::default(), content);
    };
    let yaml = &rest[..end];
    let body = rest[end + 4..]
        .trim_start_matches(['-', '\r'])
        .trim_start_matches('\n');
    match serde_yaml::from_str::<DeckMeta>(yaml) {
        Ok(meta) => (meta, body),
        Err(e) => {
            warn!("ignoring unreadable frontmatter: {e}");
            (DeckMeta::default(), content)
        }
    }
}

fn parse_slide(raw: &str) -> SlideContent {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut code: Option<Vec<&str>> = None;

    for line in raw.lines() {
        let trimmed = line.trim();

        if let Some(lines) = code.as_mut() {
            if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
                blocks.push(Block::Code(lines.join("\n")));
                code = None;
            } else {
                lines.push(line);
            }
            continue;
        }

        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            flush_paragraph(&mut paragraph, &mut blocks);
            code = Some(Vec::new());
        } else if trimmed.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
        } else if let Some((level, text)) = heading(trimmed) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::Heading {
                level,
                text: text.to_string(),
            });
        } else if let Some(item) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::Bullet(item.trim().to_string()));
        } else {
            paragraph.push(trimmed);
        }
    }
    // Unterminated fence runs to the end of the slide.
    if let Some(lines) = code {
        blocks.push(Block::Code(lines.join("\n")));
    }
    flush_paragraph(&mut paragraph, &mut blocks);

    let title = blocks.iter().find_map(|b| match b {
        Block::Heading { text, .. } => Some(text.clone()),
        _ => None,
    });
    SlideContent { title, blocks }
}

fn heading(line: &str) -> Option<(u8, &str)> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let text = line[level..].strip_prefix(' ')?;
    Some((level as u8, text.trim()))
}

fn flush_paragraph(lines: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if !lines.is_empty() {
        blocks.push(Block::Paragraph(lines.join(" ")));
        lines.clear();
    }
}
