use std::rc::Rc;

use medibook_shared::{dispatch, NavigationAction, Navigator};
use web_sys::window;
use yew::prelude::*;

use crate::{config, hooks::scroll_window_to_top};

/// Navigator backed by the browser history and window.
///
/// Route changes go through `history.pushState` followed by a synthetic
/// `popstate`, which is what `BrowserRouter` listens to.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate_to(&self, path: &str) {
        let url = config::route_path(path);
        if !navigate_spa_to(&url) {
            log::warn!("navigation to {url} was not accepted by the browser");
        }
    }

    fn scroll_to_top(&self) {
        scroll_window_to_top();
    }
}

pub fn navigate_spa_to(url: &str) -> bool {
    let Some(win) = window() else {
        return false;
    };
    if let Ok(history) = win.history() {
        if history
            .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url))
            .is_ok()
        {
            if let Ok(event) = web_sys::Event::new("popstate") {
                let _ = win.dispatch_event(&event);
            }
            return true;
        }
    }
    false
}

/// Shared handle to the navigator injected into the component tree.
#[derive(Clone)]
pub struct NavigatorHandle(Rc<dyn Navigator>);

impl NavigatorHandle {
    pub fn new(navigator: impl Navigator + 'static) -> Self {
        Self(Rc::new(navigator))
    }

    pub fn browser() -> Self {
        Self::new(BrowserNavigator)
    }

    pub fn dispatch(&self, action: NavigationAction) {
        dispatch(self.0.as_ref(), &action);
    }

    /// Callback that fires `action` on every click, ignoring the event.
    pub fn on_click(&self, action: NavigationAction) -> Callback<MouseEvent> {
        let handle = self.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            handle.dispatch(action.clone());
        })
    }
}

impl PartialEq for NavigatorHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigatorProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Provides the browser navigator to everything below it.
#[function_component(NavigatorProvider)]
pub fn navigator_provider(props: &NavigatorProviderProps) -> Html {
    let handle = use_memo((), |_| NavigatorHandle::browser());

    html! {
        <ContextProvider<NavigatorHandle> context={(*handle).clone()}>
            { props.children.clone() }
        </ContextProvider<NavigatorHandle>>
    }
}

/// The injected navigator, or the browser one when no provider is mounted.
#[hook]
pub fn use_app_navigator() -> NavigatorHandle {
    use_context::<NavigatorHandle>().unwrap_or_else(NavigatorHandle::browser)
}
