use std::time::Duration;

use tracing::debug;

use super::commands::NavigationIntent;
use super::observer::{Crossing, ScrollObserver, TriggerBand, Viewport};
use super::position::PositionState;
use super::registry::SlideRegistry;
use super::scroller::Scroller;
use super::surface::ControlSurface;
use super::validator;

pub const DEFAULT_SCROLL_DURATION: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavSettings {
    pub band: TriggerBand,
    pub scroll_duration: Duration,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            band: TriggerBand::default(),
            scroll_duration: DEFAULT_SCROLL_DURATION,
        }
    }
}

/// Keys that move between slides when the slide-number field is not focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Down,
    PageDown,
    Up,
    PageUp,
    Home,
    End,
}

impl NavKey {
    pub fn intent(self) -> NavigationIntent {
        match self {
            Self::Down | Self::PageDown => NavigationIntent::Next,
            Self::Up | Self::PageUp => NavigationIntent::Previous,
            Self::Home => NavigationIntent::First,
            Self::End => NavigationIntent::Last,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitKind {
    /// Enter pressed in the field. Also releases focus.
    Enter,
    /// The field lost focus.
    Blur,
    /// Escape pressed in the field. Releases focus and reverts.
    Cancel,
}

/// Everything the toolbar and keyboard can tell the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    PreviousClicked,
    NextClicked,
    FirstClicked,
    LastClicked,
    Key(NavKey),
    InputFocused,
    InputEdited(String),
    InputCommitted { text: String, kind: CommitKind },
    MenuToggled,
    MenuEntryClicked(usize),
    ClickedOutsideMenu,
}

/// Owns the navigation state of one deck.
///
/// Control events resolve to scroll requests on `S`; the position only
/// changes through [`SlideController::on_scroll`].
pub struct SlideController<S> {
    registry: SlideRegistry,
    position: PositionState,
    observer: ScrollObserver,
    surface: ControlSurface,
    scroller: S,
    settings: NavSettings,
}

impl<S: Scroller> SlideController<S> {
    pub fn new(registry: SlideRegistry, scroller: S, settings: NavSettings) -> Self {
        let observer = ScrollObserver::new(settings.band, registry.len());
        let position = PositionState::new();
        let mut surface = ControlSurface::new(&registry);
        surface.render(position.read(), registry.len());
        Self {
            registry,
            position,
            observer,
            surface,
            scroller,
            settings,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.registry.len()
    }

    /// Last slide confirmed visible.
    pub fn position(&self) -> usize {
        self.position.read()
    }

    pub fn surface(&self) -> &ControlSurface {
        &self.surface
    }

    pub fn take_select_all(&mut self) -> bool {
        self.surface.take_select_all()
    }

    pub fn scroller(&self) -> &S {
        &self.scroller
    }

    pub fn scroller_mut(&mut self) -> &mut S {
        &mut self.scroller
    }

    /// Feed the current scroll geometry. Re-renders the control surface when
    /// a slide crossed into view.
    pub fn on_scroll(&mut self, viewport: &Viewport) -> Option<Crossing> {
        let crossing = self.observer.observe(viewport, &mut self.position)?;
        self.render();
        Some(crossing)
    }

    /// Resolve an intent and request a scroll to its target. Returns the
    /// requested slide, or `None` when the intent was a no-op.
    pub fn navigate(&mut self, intent: NavigationIntent) -> Option<usize> {
        let count = self.registry.len();
        match intent.execute(self.position.read(), count) {
            Ok(target) => {
                let slide = self.registry.get(target)?;
                debug!(?intent, target, "scrolling to slide");
                self.scroller.scroll_to(slide, self.settings.scroll_duration);
                Some(target)
            }
            Err(err) => {
                debug!(?intent, %err, "navigation ignored");
                self.render();
                None
            }
        }
    }

    /// Apply one control event. Returns the slide a scroll was requested to,
    /// if any.
    pub fn dispatch(&mut self, event: ControlEvent) -> Option<usize> {
        match event {
            ControlEvent::PreviousClicked => self.navigate(NavigationIntent::Previous),
            ControlEvent::NextClicked => self.navigate(NavigationIntent::Next),
            ControlEvent::FirstClicked => self.navigate(NavigationIntent::First),
            ControlEvent::LastClicked => self.navigate(NavigationIntent::Last),
            ControlEvent::Key(key) => {
                if self.surface.input_focused() {
                    return None;
                }
                self.navigate(key.intent())
            }
            ControlEvent::InputFocused => {
                self.surface.focus_input();
                None
            }
            ControlEvent::InputEdited(raw) => {
                let cleaned = validator::sanitize(&raw, self.registry.len());
                self.surface.set_input_text(cleaned);
                None
            }
            ControlEvent::InputCommitted { text, kind } => self.commit_input(&text, kind),
            ControlEvent::MenuToggled => {
                let menu = self.surface.menu_mut();
                let open = !menu.is_open();
                menu.set_open(open);
                None
            }
            ControlEvent::MenuEntryClicked(slide) => {
                self.surface.menu_mut().set_open(false);
                self.navigate(NavigationIntent::JumpTo(slide))
            }
            ControlEvent::ClickedOutsideMenu => {
                self.surface.menu_mut().set_open(false);
                None
            }
        }
    }

    fn commit_input(&mut self, text: &str, kind: CommitKind) -> Option<usize> {
        // Enter already committed and released focus; the blur that follows
        // must not commit again.
        if kind == CommitKind::Blur && !self.surface.input_focused() {
            return None;
        }
        self.surface.blur_input();
        if kind == CommitKind::Cancel {
            self.render();
            return None;
        }
        match validator::commit(text, self.registry.len()) {
            Ok(intent) => {
                // The field shows the confirmed slide until the target arrives.
                let requested = self.navigate(intent);
                self.render();
                requested
            }
            Err(err) => {
                debug!(%err, "reverting slide number field");
                self.render();
                None
            }
        }
    }

    fn render(&mut self) {
        self.surface
            .render(self.position.read(), self.registry.len());
    }
}
