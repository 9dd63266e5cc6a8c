use tracing::warn;

use super::registry::SlideRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    slide: usize,
    label: String,
    current: bool,
}

impl MenuEntry {
    pub fn slide(&self) -> usize {
        self.slide
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_current(&self) -> bool {
        self.current
    }
}

/// Dropdown listing slides by label. Each slide appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownMenu {
    entries: Vec<MenuEntry>,
    open: bool,
}

impl DropdownMenu {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, String)>,
    {
        let mut menu = Self::default();
        for (slide, label) in entries {
            if menu.entries.iter().any(|e| e.slide == slide) {
                warn!(slide, label = %label, "dropping duplicate menu entry");
                continue;
            }
            menu.entries.push(MenuEntry {
                slide,
                label,
                current: false,
            });
        }
        menu
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current(&self) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| e.current)
    }

    pub(crate) fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    fn mark(&mut self, slide: Option<usize>) {
        let mut marked = false;
        for entry in &mut self.entries {
            entry.current = !marked && Some(entry.slide) == slide;
            marked |= entry.current;
        }
    }
}

/// What the toolbar shows: slide-number field, arrow controls and menu.
///
/// `render` derives everything except interaction state (focus, open menu,
/// text being typed between renders) from the confirmed position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSurface {
    slide_count: usize,
    input_text: String,
    input_focused: bool,
    select_all_pending: bool,
    prev_enabled: bool,
    next_enabled: bool,
    menu: DropdownMenu,
}

impl ControlSurface {
    pub fn new(registry: &SlideRegistry) -> Self {
        let menu = DropdownMenu::new(
            registry
                .iter()
                .map(|s| (s.position(), s.label().to_string())),
        );
        Self::with_menu(registry.len(), menu)
    }

    pub fn with_menu(slide_count: usize, menu: DropdownMenu) -> Self {
        Self {
            slide_count,
            input_text: String::new(),
            input_focused: false,
            select_all_pending: false,
            prev_enabled: false,
            next_enabled: false,
            menu,
        }
    }

    pub fn render(&mut self, current: usize, slide_count: usize) {
        self.slide_count = slide_count;
        if slide_count == 0 {
            self.input_text.clear();
            self.prev_enabled = false;
            self.next_enabled = false;
            self.menu.mark(None);
            return;
        }
        self.input_text = current.to_string();
        self.prev_enabled = current > 1;
        self.next_enabled = current < slide_count;
        self.menu.mark(Some(current));
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    /// Largest value the slide-number field accepts.
    pub fn input_max(&self) -> usize {
        self.slide_count
    }

    /// Total shown next to the field, e.g. "/ 7".
    pub fn count_label(&self) -> String {
        format!("/ {}", self.slide_count)
    }

    pub fn input_focused(&self) -> bool {
        self.input_focused
    }

    pub fn prev_enabled(&self) -> bool {
        self.prev_enabled
    }

    pub fn next_enabled(&self) -> bool {
        self.next_enabled
    }

    pub fn menu(&self) -> &DropdownMenu {
        &self.menu
    }

    /// Whether the host should select the whole field text this frame.
    /// Reading clears the request.
    pub fn take_select_all(&mut self) -> bool {
        std::mem::take(&mut self.select_all_pending)
    }

    pub(crate) fn set_input_text(&mut self, text: String) {
        self.input_text = text;
    }

    pub(crate) fn focus_input(&mut self) {
        self.input_focused = true;
        self.select_all_pending = true;
    }

    pub(crate) fn blur_input(&mut self) {
        self.input_focused = false;
        self.select_all_pending = false;
    }

    pub(crate) fn menu_mut(&mut self) -> &mut DropdownMenu {
        &mut self.menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn surface(count: usize) -> ControlSurface {
        let labels: Vec<String> = (1..=count).map(|i| format!("S{i}")).collect();
        ControlSurface::new(&SlideRegistry::from_labels(labels))
    }

    #[rstest]
    #[case(1, false, true)]
    #[case(4, true, true)]
    #[case(7, true, false)]
    fn arrow_controls_follow_position(
        #[case] current: usize,
        #[case] prev: bool,
        #[case] next: bool,
    ) {
        let mut s = surface(7);
        s.render(current, 7);
        assert_eq!(s.input_text(), current.to_string());
        assert_eq!(s.prev_enabled(), prev);
        assert_eq!(s.next_enabled(), next);
    }

    #[test]
    fn single_slide_disables_both_arrows() {
        let mut s = surface(1);
        s.render(1, 1);
        assert!(!s.prev_enabled());
        assert!(!s.next_enabled());
        assert_eq!(s.menu().current().map(MenuEntry::slide), Some(1));
    }

    #[test]
    fn exactly_one_entry_marked() {
        let mut s = surface(5);
        for current in 1..=5 {
            s.render(current, 5);
            let marked: Vec<usize> = s
                .menu()
                .entries()
                .iter()
                .filter(|e| e.is_current())
                .map(MenuEntry::slide)
                .collect();
            assert_eq!(marked, vec![current]);
        }
    }

    #[test]
    fn duplicate_entries_are_dropped() {
        let menu = DropdownMenu::new([
            (1, "Intro".to_string()),
            (2, "Body".to_string()),
            (2, "Body again".to_string()),
        ]);
        assert_eq!(menu.entries().len(), 2);

        let mut s = ControlSurface::with_menu(2, menu);
        s.render(2, 2);
        let marked = s.menu().entries().iter().filter(|e| e.is_current()).count();
        assert_eq!(marked, 1);
        assert_eq!(s.menu().current().map(MenuEntry::label), Some("Body"));
    }

    #[test]
    fn empty_deck_presents_disabled() {
        let mut s = surface(0);
        s.render(1, 0);
        assert_eq!(s.input_text(), "");
        assert!(!s.prev_enabled());
        assert!(!s.next_enabled());
        assert!(s.menu().current().is_none());
        assert_eq!(s.count_label(), "/ 0");
    }

    #[test]
    fn render_is_idempotent() {
        let mut s = surface(7);
        s.render(3, 7);
        let first = s.clone();
        s.render(3, 7);
        assert_eq!(s, first);
    }

    #[test]
    fn select_all_is_consumed_once() {
        let mut s = surface(3);
        s.focus_input();
        assert!(s.take_select_all());
        assert!(!s.take_select_all());
        assert!(s.input_focused());
    }
}
