use tracing::debug;

use super::position::PositionState;

/// Viewport band a slide must overlap to count as visible.
///
/// Both values are fractions of the viewport height, measured from its top.
/// A slide is inside the band once its top edge has reached `start` and
/// until its bottom edge passes above `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerBand {
    start: f32,
    end: f32,
}

impl Default for TriggerBand {
    fn default() -> Self {
        Self {
            start: 0.8,
            end: 0.2,
        }
    }
}

impl TriggerBand {
    /// Returns `None` unless `0 <= end < start <= 1`.
    pub fn new(start: f32, end: f32) -> Option<Self> {
        let valid = (0.0..=1.0).contains(&start) && (0.0..=1.0).contains(&end) && end < start;
        valid.then_some(Self { start, end })
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    fn contains(&self, top: f32, bottom: f32, height: f32) -> bool {
        top <= self.start * height && bottom >= self.end * height
    }
}

/// Scroll geometry of the deck container for one sample.
///
/// Slides are laid out back to back, each `page_height` tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub offset: f32,
    pub height: f32,
    pub page_height: f32,
}

impl Viewport {
    /// Top edge of a page relative to the viewport top.
    pub fn page_top(&self, page: usize) -> f32 {
        page as f32 * self.page_height - self.offset
    }

    /// Largest offset the container can scroll to.
    pub fn max_offset(&self, slide_count: usize) -> f32 {
        (slide_count as f32 * self.page_height - self.height).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossingKind {
    /// Entered while scrolling forward.
    Enter,
    /// Entered while scrolling back.
    EnterBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossing {
    pub slide: usize,
    pub kind: CrossingKind,
}

/// Watches every slide against the trigger band and reports the ones that
/// cross into it.
#[derive(Debug, Clone)]
pub struct ScrollObserver {
    band: TriggerBand,
    inside: Vec<bool>,
    last_offset: Option<f32>,
}

impl ScrollObserver {
    pub fn new(band: TriggerBand, slide_count: usize) -> Self {
        Self {
            band,
            inside: vec![false; slide_count],
            last_offset: None,
        }
    }

    /// Feed one scroll sample. Every slide that crossed into the band since
    /// the previous sample is reported to `position`, in scroll order, so the
    /// last one to cross wins. Returns that last crossing.
    pub fn observe(&mut self, viewport: &Viewport, position: &mut PositionState) -> Option<Crossing> {
        let backward = self
            .last_offset
            .is_some_and(|last| viewport.offset < last);
        self.last_offset = Some(viewport.offset);

        let mut entered: Vec<usize> = Vec::new();
        for (page, was_inside) in self.inside.iter_mut().enumerate() {
            let top = viewport.page_top(page);
            let bottom = top + viewport.page_height;
            let now_inside = self.band.contains(top, bottom, viewport.height);
            if now_inside && !*was_inside {
                entered.push(page + 1);
            }
            *was_inside = now_inside;
        }

        // Pages are scanned top to bottom; scrolling back they cross bottom first.
        if backward {
            entered.reverse();
        }
        let kind = if backward {
            CrossingKind::EnterBack
        } else {
            CrossingKind::Enter
        };

        let mut last = None;
        for slide in entered {
            debug!(slide, ?kind, offset = viewport.offset, "slide crossed into view");
            position.report(slide);
            last = Some(Crossing { slide, kind });
        }
        last
    }
}
