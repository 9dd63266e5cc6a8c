mod properties;

use std::time::{Duration, Instant};

use super::controller::{NavSettings, SlideController};
use super::observer::Viewport;
use super::registry::{Slide, SlideRegistry};
use super::scroller::{Scroller, SmoothScroller};

const PAGE: f32 = 100.0;
const FRAME: Duration = Duration::from_millis(16);

fn registry(count: usize) -> SlideRegistry {
    SlideRegistry::from_labels((1..=count).map(|i| format!("Slide {i}")))
}

/// A deck of full-viewport pages driven frame by frame on a fake clock.
struct Harness {
    ctl: SlideController<SmoothScroller>,
    clock: Instant,
}

impl Harness {
    fn new(count: usize) -> Self {
        let max_offset = (count as f32 - 1.0).max(0.0) * PAGE;
        let scroller = SmoothScroller::new(PAGE, max_offset);
        let ctl = SlideController::new(registry(count), scroller, NavSettings::default());
        let mut harness = Self {
            ctl,
            clock: Instant::now(),
        };
        harness.sample();
        harness
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            offset: self.ctl.scroller().offset(),
            height: PAGE,
            page_height: PAGE,
        }
    }

    fn sample(&mut self) {
        let viewport = self.viewport();
        self.ctl.on_scroll(&viewport);
    }

    /// Run frames until the scroll animation has finished.
    fn settle(&mut self) {
        for _ in 0..1000 {
            if !self.ctl.scroller().is_animating() {
                return;
            }
            self.clock += FRAME;
            self.ctl.scroller_mut().tick(self.clock);
            self.sample();
        }
        panic!("scroll animation never settled");
    }

    /// Advance a few frames without finishing the animation.
    fn frames(&mut self, n: usize) {
        for _ in 0..n {
            self.clock += FRAME;
            self.ctl.scroller_mut().tick(self.clock);
            self.sample();
        }
    }

    fn scroll_by(&mut self, delta: f32) {
        self.ctl.scroller_mut().nudge(delta);
        self.sample();
    }

    fn position(&self) -> usize {
        self.ctl.position()
    }

    fn field(&self) -> &str {
        self.ctl.surface().input_text()
    }

    fn marked(&self) -> Vec<usize> {
        self.ctl
            .surface()
            .menu()
            .entries()
            .iter()
            .filter(|e| e.is_current())
            .map(|e| e.slide())
            .collect()
    }
}

/// Records scroll requests without moving anything.
#[derive(Default)]
struct RecordingScroller {
    requests: Vec<(usize, Duration)>,
}

impl Scroller for RecordingScroller {
    fn scroll_to(&mut self, slide: &Slide, duration: Duration) {
        self.requests.push((slide.position(), duration));
    }
}
