/// The slide most recently confirmed visible by the scroll observer.
///
/// A plain register: `report` overwrites without validation, since only the
/// observer calls it and the observer only reports slides it has seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionState {
    current: usize,
}

impl Default for PositionState {
    fn default() -> Self {
        Self { current: 1 }
    }
}

impl PositionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, index: usize) {
        self.current = index;
    }

    pub fn read(&self) -> usize {
        self.current
    }
}
