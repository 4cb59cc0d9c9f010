//! Footer reveal binding.
//!
//! Bridges browser signals to [`FooterPolicy`]. The observers for a mode are
//! held by [`RevealListeners`], which disconnects them on drop, so switching
//! modes is "drop the old listeners, reset the policy, install new ones".

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use lucen_core::{FooterMode, FooterPolicy};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::REVEAL_INTERSECTION_RATIO;
use crate::utils::dom;

/// Owns the visibility policy and the listeners of the active mode.
pub struct FooterReveal {
    policy: Rc<RefCell<FooterPolicy>>,
    visible: RwSignal<bool>,
    listeners: Option<RevealListeners>,
}

impl FooterReveal {
    /// Create an unbound policy; nothing is observed until [`Self::configure`].
    pub fn new(mode: FooterMode, hide_threshold: f64, visible: RwSignal<bool>) -> Self {
        let policy = FooterPolicy::new(mode, hide_threshold, false);
        visible.set(policy.visible());
        Self {
            policy: Rc::new(RefCell::new(policy)),
            visible,
            listeners: None,
        }
    }

    /// Switch to `mode`, observing `sentinel` when the mode needs it.
    ///
    /// Without a sentinel the policy stays inert.
    pub fn configure(&mut self, mode: FooterMode, sentinel: Option<Element>) {
        self.listeners = None;

        {
            let mut policy = self.policy.borrow_mut();
            policy.set_sentinel_present(sentinel.is_some());
            policy.configure(mode);
            self.visible.set(policy.visible());
        }

        let Some(sentinel) = sentinel.filter(|_| mode.observes_sentinel()) else {
            return;
        };

        match RevealListeners::install(&sentinel, mode, Rc::clone(&self.policy), self.visible) {
            Ok(listeners) => self.listeners = Some(listeners),
            Err(err) => tracing::warn!(?err, %mode, "footer observers unavailable"),
        }
    }
}

type IntersectCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Browser listeners for one footer mode. Dropping detaches them.
struct RevealListeners {
    observer: IntersectionObserver,
    _on_intersect: IntersectCallback,
    on_scroll: Option<Closure<dyn FnMut()>>,
}

impl RevealListeners {
    fn install(
        sentinel: &Element,
        mode: FooterMode,
        policy: Rc<RefCell<FooterPolicy>>,
        visible: RwSignal<bool>,
    ) -> Result<Self, JsValue> {
        let window = dom::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;

        let intersect_policy = Rc::clone(&policy);
        let on_intersect: IntersectCallback = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let scroll_y = dom::scroll_y();
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let shown = intersect_policy
                        .borrow_mut()
                        .on_intersection(entry.is_intersecting(), scroll_y);
                    visible.set(shown);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_INTERSECTION_RATIO));
        let observer =
            IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
        observer.observe(sentinel);

        let on_scroll = if mode.observes_scroll() {
            let on_scroll = Closure::<dyn FnMut()>::new(move || {
                let shown = policy.borrow_mut().on_scroll(dom::scroll_y());
                visible.set(shown);
            });
            if let Err(err) = window
                .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
            {
                observer.disconnect();
                return Err(err);
            }
            Some(on_scroll)
        } else {
            None
        };

        Ok(Self {
            observer,
            _on_intersect: on_intersect,
            on_scroll,
        })
    }
}

impl Drop for RevealListeners {
    fn drop(&mut self) {
        self.observer.disconnect();
        if let Some(on_scroll) = &self.on_scroll
            && let Some(window) = dom::window()
        {
            let _ = window
                .remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        }
    }
}
