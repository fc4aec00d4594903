//! Entrance and hover state transitions.

#[cfg(test)]
mod tests {
    use medibook_shared::{default_specialities, EntrancePhase, EntranceTransition, HoverTracker};

    #[test]
    fn visibility_is_monotonic_across_rerenders() {
        let mut transition = EntranceTransition::new();
        let mut observed = vec![transition.is_visible()];
        let mut flips = 0;
        for _ in 0..4 {
            if transition.on_mount() {
                flips += 1;
            }
            observed.push(transition.is_visible());
        }

        assert_eq!(flips, 1);
        assert_eq!(observed, vec![false, true, true, true, true]);
        assert_eq!(transition.phase(), EntrancePhase::Settled);
    }

    #[test]
    fn hover_walk_over_the_built_in_grid() {
        let catalog = default_specialities();
        let mut hover = HoverTracker::new(catalog.len());

        for index in 0..catalog.len() {
            hover.enter(index);
            assert_eq!(hover.hovered(), Some(index));
            hover.leave(index);
            assert_eq!(hover.hovered(), None);
        }
    }

    #[test]
    fn moving_between_tiles_without_leave_keeps_last() {
        let mut hover = HoverTracker::new(6);
        hover.enter(1);
        hover.enter(4);
        hover.leave(1);
        assert_eq!(hover.hovered(), Some(4));
        hover.leave(4);
        assert_eq!(hover.hovered(), None);
    }
}
