//! Per-instance presentational state of the landing components.
//!
//! These are plain owned records with explicit transition methods; the
//! frontend keeps one per mounted component and re-renders on change.

/// Style state selected by the entrance transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrancePhase {
    /// Before the first paint has been committed.
    Entering,
    /// After the post-mount flip.
    Settled,
}

/// One-shot visibility flag: starts hidden, becomes visible once after the
/// first render, never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntranceTransition {
    visible: bool,
}

impl EntranceTransition {
    /// A hidden, not yet mounted instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Post-mount transition. Returns `true` only on the call that flipped
    /// the flag.
    pub fn on_mount(&mut self) -> bool {
        if self.visible {
            return false;
        }
        self.visible = true;
        true
    }

    /// Current flag value.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Style state for the current flag value.
    pub fn phase(&self) -> EntrancePhase {
        if self.visible {
            EntrancePhase::Settled
        } else {
            EntrancePhase::Entering
        }
    }
}

/// Which tile of a rendered sequence is under the pointer, if any.
///
/// The hovered index is always a valid index into the current sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverTracker {
    len: usize,
    hovered: Option<usize>,
}

impl HoverTracker {
    /// Tracker for a sequence of `len` tiles with nothing hovered.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            hovered: None,
        }
    }

    /// Pointer entered tile `index`. Last enter wins; out-of-range indices
    /// are ignored. Returns whether the hovered index changed.
    pub fn enter(&mut self, index: usize) -> bool {
        if index >= self.len {
            tracing::trace!(index, len = self.len, "ignoring hover outside the grid");
            return false;
        }
        let changed = self.hovered != Some(index);
        self.hovered = Some(index);
        changed
    }

    /// Pointer left tile `index`. A leave for a tile that is not the hovered
    /// one is stale and ignored. Returns whether the hovered index changed.
    pub fn leave(&mut self, index: usize) -> bool {
        if self.hovered == Some(index) {
            self.hovered = None;
            true
        } else {
            false
        }
    }

    /// The rendered sequence changed length; drops a hover that no longer
    /// points at a tile.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.hovered.is_some_and(|index| index >= len) {
            self.hovered = None;
        }
    }

    /// Currently hovered tile.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Whether tile `index` is the hovered one.
    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }

    /// Length of the tracked sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tracked sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_starts_entering() {
        let transition = EntranceTransition::new();
        assert!(!transition.is_visible());
        assert_eq!(transition.phase(), EntrancePhase::Entering);
    }

    #[test]
    fn entrance_flips_exactly_once() {
        let mut transition = EntranceTransition::new();
        assert!(transition.on_mount());
        assert!(!transition.on_mount());
        assert!(!transition.on_mount());
        assert!(transition.is_visible());
        assert_eq!(transition.phase(), EntrancePhase::Settled);
    }

    #[test]
    fn enter_then_leave_clears() {
        let mut hover = HoverTracker::new(3);
        assert!(hover.enter(1));
        assert!(hover.is_hovered(1));
        assert!(hover.leave(1));
        assert_eq!(hover.hovered(), None);
    }

    #[test]
    fn last_enter_wins() {
        let mut hover = HoverTracker::new(3);
        hover.enter(0);
        hover.enter(2);
        assert_eq!(hover.hovered(), Some(2));
        assert!(!hover.is_hovered(0));
    }

    #[test]
    fn stale_leave_keeps_current_hover() {
        let mut hover = HoverTracker::new(3);
        hover.enter(0);
        hover.enter(2);
        assert!(!hover.leave(0));
        assert_eq!(hover.hovered(), Some(2));
    }

    #[test]
    fn entering_same_tile_twice_reports_no_change() {
        let mut hover = HoverTracker::new(2);
        assert!(hover.enter(1));
        assert!(!hover.enter(1));
    }

    #[test]
    fn out_of_range_enter_is_ignored() {
        let mut hover = HoverTracker::new(2);
        assert!(!hover.enter(2));
        assert_eq!(hover.hovered(), None);

        let mut empty = HoverTracker::new(0);
        assert!(empty.is_empty());
        assert!(!empty.enter(0));
    }

    #[test]
    fn shrinking_drops_dangling_hover() {
        let mut hover = HoverTracker::new(5);
        hover.enter(4);
        hover.resize(5);
        assert_eq!(hover.hovered(), Some(4));
        hover.resize(3);
        assert_eq!(hover.hovered(), None);
        assert_eq!(hover.len(), 3);
    }
}
