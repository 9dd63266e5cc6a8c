use crate::deck::Deck;

/// Opaque reference to the page a slide is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideHandle(usize);

impl SlideHandle {
    /// Index of the page in layout order (0-based).
    pub fn page(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    position: usize,
    handle: SlideHandle,
    label: String,
}

impl Slide {
    /// 1-based position in the deck.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn handle(&self) -> SlideHandle {
        self.handle
    }

    /// Text shown for this slide in the dropdown menu.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The ordered slides of a deck, enumerated once at startup.
#[derive(Debug, Clone, Default)]
pub struct SlideRegistry {
    slides: Vec<Slide>,
}

impl SlideRegistry {
    pub fn build(deck: &Deck) -> Self {
        Self::from_labels(
            deck.slides
                .iter()
                .enumerate()
                .map(|(i, s)| s.title.clone().unwrap_or_else(|| format!("Slide {}", i + 1))),
        )
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slides = labels
            .into_iter()
            .enumerate()
            .map(|(page, label)| Slide {
                position: page + 1,
                handle: SlideHandle(page),
                label: label.into(),
            })
            .collect();
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at a 1-based position.
    pub fn get(&self, position: usize) -> Option<&Slide> {
        position
            .checked_sub(1)
            .and_then(|page| self.slides.get(page))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_one_based_and_ordered() {
        let registry = SlideRegistry::from_labels(["Intro", "Body", "Outro"]);
        assert_eq!(registry.len(), 3);
        let positions: Vec<usize> = registry.iter().map(Slide::position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(registry.get(2).map(Slide::label), Some("Body"));
        assert_eq!(registry.get(2).map(|s| s.handle().page()), Some(1));
    }

    #[test]
    fn get_outside_range_is_none() {
        let registry = SlideRegistry::from_labels(["Only"]);
        assert!(registry.get(0).is_none());
        assert!(registry.get(2).is_none());
    }

    #[test]
    fn empty_registry() {
        let registry = SlideRegistry::from_labels(Vec::<String>::new());
        assert!(registry.is_empty());
        assert!(registry.get(1).is_none());
    }

    #[test]
    fn build_from_deck_falls_back_to_numbered_labels() {
        let deck = crate::deck::parse("# Welcome\n\nHello\n\n---\n\nNo heading here");
        let registry = SlideRegistry::build(&deck);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(1).map(Slide::label), Some("Welcome"));
        assert_eq!(registry.get(2).map(Slide::label), Some("Slide 2"));
    }
}
