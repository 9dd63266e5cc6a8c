use std::time::{Duration, Instant};

use super::registry::Slide;

/// Animates the deck container towards a slide.
///
/// Requests are fire-and-forget. A request made while another is still
/// running re-targets the animation; there is no cancellation.
pub trait Scroller {
    fn scroll_to(&mut self, slide: &Slide, duration: Duration);
}

/// Quadratic ease-in-out.
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[derive(Debug, Clone)]
struct ScrollAnimation {
    to_page: usize,
    duration: Duration,
    /// Stamped on the first tick after the request, together with the
    /// offset the animation starts from.
    started: Option<(Instant, f32)>,
}

/// Scroll offset of a vertically stacked deck with animated, re-targetable
/// scroll-to-slide requests.
#[derive(Debug, Clone)]
pub struct SmoothScroller {
    offset: f32,
    page_height: f32,
    max_offset: f32,
    animation: Option<ScrollAnimation>,
}

impl SmoothScroller {
    pub fn new(page_height: f32, max_offset: f32) -> Self {
        Self {
            offset: 0.0,
            page_height,
            max_offset: max_offset.max(0.0),
            animation: None,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Update the layout, keeping the same fraction of the current page in
    /// view when the page height changes.
    pub fn set_geometry(&mut self, page_height: f32, max_offset: f32) {
        if page_height > 0.0 && self.page_height > 0.0 && page_height != self.page_height {
            self.offset *= page_height / self.page_height;
        }
        self.page_height = page_height;
        self.max_offset = max_offset.max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_offset);
    }

    /// Manual scroll by `delta` pixels. Ignored while an animation runs.
    pub fn nudge(&mut self, delta: f32) -> bool {
        if self.animation.is_some() || delta == 0.0 {
            return false;
        }
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset);
        true
    }

    fn page_offset(&self, page: usize) -> f32 {
        (page as f32 * self.page_height).clamp(0.0, self.max_offset)
    }

    /// Advance any running animation to `now` and return the new offset.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let Some(anim) = self.animation.as_mut() else {
            return self.offset;
        };
        let (start, from) = *anim.started.get_or_insert((now, self.offset));
        let to_page = anim.to_page;
        let duration = anim.duration.as_secs_f32();

        let target = self.page_offset(to_page);
        let raw_t = if duration > 0.0 {
            (now.saturating_duration_since(start).as_secs_f32() / duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        if raw_t >= 1.0 {
            self.offset = target;
            self.animation = None;
        } else {
            self.offset = from + (target - from) * ease_in_out(raw_t);
        }
        self.offset
    }
}

impl Scroller for SmoothScroller {
    fn scroll_to(&mut self, slide: &Slide, duration: Duration) {
        self.animation = Some(ScrollAnimation {
            to_page: slide.handle().page(),
            duration,
            started: None,
        });
    }
}
