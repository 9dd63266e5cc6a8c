/// Split a deck body (frontmatter already removed) into raw slide texts.
///
/// A slide ends at a `---` line that has a blank line (or the start/end of
/// the body) on both sides, or right before a `# ` heading once the slide
/// already has content. Headings inside fenced code never split.
pub fn split(body: &str) -> Vec<String> {
    let body = body.replace("\r\n", "\n");
    let lines: Vec<&str> = body.lines().collect();

    let mut slides = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut fence: Option<Fence> = None;

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        if let Some(open) = fence {
            if open.closes(trimmed) {
                fence = None;
            }
            current.push(line);
            continue;
        }

        if is_rule(trimmed) {
            let blank_before = i == 0 || lines[i - 1].trim().is_empty();
            let blank_after = lines.get(i + 1).is_none_or(|l| l.trim().is_empty());
            if blank_before && blank_after {
                flush(&mut current, &mut slides);
                continue;
            }
        }

        if line.starts_with("# ") && has_content(&current) {
            flush(&mut current, &mut slides);
        }

        fence = Fence::opens(trimmed);
        current.push(line);
    }
    flush(&mut current, &mut slides);
    slides
}

#[derive(Debug, Clone, Copy)]
struct Fence {
    marker: char,
    len: usize,
}

impl Fence {
    fn opens(line: &str) -> Option<Self> {
        let marker = line.chars().next().filter(|c| *c == '`' || *c == '~')?;
        let len = line.chars().take_while(|&c| c == marker).count();
        (len >= 3).then_some(Self { marker, len })
    }

    fn closes(self, line: &str) -> bool {
        let len = line.chars().take_while(|&c| c == self.marker).count();
        len >= self.len && line[len * self.marker.len_utf8()..].trim().is_empty()
    }
}

fn is_rule(line: &str) -> bool {
    line.len() >= 3 && line.chars().all(|c| c == '-')
}

fn has_content(lines: &[&str]) -> bool {
    lines.iter().any(|l| !l.trim().is_empty())
}

fn flush(current: &mut Vec<&str>, slides: &mut Vec<String>) {
    let text = current.join("\n").trim().to_string();
    if !text.is_empty() {
        slides.push(text);
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_with_blank_lines_splits() {
        let slides = split("Slide one\n\n---\n\nSlide two");
        assert_eq!(slides, vec!["Slide one", "Slide two"]);
    }

    #[test]
    fn rule_without_blank_lines_stays() {
        let slides = split("Heading\n---\nText");
        assert_eq!(slides.len(), 1);
    }

    #[test]
    fn h1_starts_new_slide_after_content() {
        let slides = split("# First\n\nContent\n\n# Second\n\nMore");
        assert_eq!(slides.len(), 2);
        assert!(slides[0].starts_with("# First"));
        assert!(slides[1].starts_with("# Second"));
    }

    #[test]
    fn leading_h1_does_not_split() {
        assert_eq!(split("# Only\n\nBody").len(), 1);
    }

    #[test]
    fn h2_does_not_split() {
        assert_eq!(split("# Title\n\n## Sub\n\nBody").len(), 1);
    }

    #[test]
    fn heading_in_code_fence_does_not_split() {
        let slides = split("# Title\n\n```sh\n# comment\n---\n\n```\n\nafter");
        assert_eq!(slides.len(), 1);
    }

    #[test]
    fn empty_chunks_are_dropped() {
        let slides = split("\n\n---\n\n---\n\nOnly\n\n---\n\n");
        assert_eq!(slides, vec!["Only"]);
    }

    #[test]
    fn crlf_input() {
        let slides = split("One\r\n\r\n---\r\n\r\nTwo");
        assert_eq!(slides, vec!["One", "Two"]);
    }
}
