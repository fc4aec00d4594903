use std::rc::Rc;

use gloo_timers::callback::Timeout;
use medibook_shared::{EntranceTransition, HoverTracker};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config::ENTRANCE_DELAY_MS;

/// One-shot entrance flag for an animated section.
///
/// Starts hidden and flips to visible once, shortly after the first paint so
/// the CSS transition between the two style states actually runs.
///
/// # Example
/// ```rust
/// #[function_component(Banner)]
/// fn banner() -> Html {
///     let entrance = use_entrance_transition();
///     let class = if entrance.is_visible() { "opacity-100" } else { "opacity-0" };
///     html! { <section class={class} /> }
/// }
/// ```
#[hook]
pub fn use_entrance_transition() -> EntranceTransition {
    let transition = use_state(EntranceTransition::new);

    {
        let transition = transition.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(ENTRANCE_DELAY_MS, move || {
                let mut next = *transition;
                if next.on_mount() {
                    transition.set(next);
                }
            });
            // Dropping the timeout cancels it if the section unmounts first.
            move || drop(timeout)
        });
    }

    *transition
}

#[derive(Debug, Clone, PartialEq)]
struct HoverState(HoverTracker);

enum HoverAction {
    Enter(usize),
    Leave(usize),
    Resize(usize),
}

impl Reducible for HoverState {
    type Action = HoverAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0;
        match action {
            HoverAction::Enter(index) => {
                next.enter(index);
            },
            HoverAction::Leave(index) => {
                next.leave(index);
            },
            HoverAction::Resize(len) => next.resize(len),
        }
        if next == self.0 {
            self
        } else {
            Rc::new(HoverState(next))
        }
    }
}

/// Track which of `len` tiles is under the pointer.
///
/// Returns the current tracker plus enter/leave callbacks taking the tile
/// index. Re-renders only when the hovered tile actually changes.
#[hook]
pub fn use_hover_tracker(len: usize) -> (HoverTracker, Callback<usize>, Callback<usize>) {
    let state = use_reducer_eq(move || HoverState(HoverTracker::new(len)));

    {
        let state = state.clone();
        use_effect_with(len, move |len| {
            state.dispatch(HoverAction::Resize(*len));
            || ()
        });
    }

    let on_enter = {
        let state = state.clone();
        Callback::from(move |index: usize| state.dispatch(HoverAction::Enter(index)))
    };
    let on_leave = {
        let state = state.clone();
        Callback::from(move |index: usize| state.dispatch(HoverAction::Leave(index)))
    };

    (state.0, on_enter, on_leave)
}

pub fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
