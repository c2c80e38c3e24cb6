//! Entrance animations driven by [`AnimationSpec`].
//!
//! The core decides the start state, end state and trigger; this module
//! only wires the trigger to the browser (mount or IntersectionObserver)
//! and lets a CSS transition interpolate.

use leptos::html;
use leptos::prelude::*;
use nexus_core::animation::{AnimationSpec, RevealOnce, Trigger};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

type IntersectionCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;
type ActiveObservation = Observation<web_sys::IntersectionObserver, IntersectionCallback>;

/// Wraps `children` in a block that animates from `spec.initial` to
/// `spec.target` the first time its trigger fires, and never again.
///
/// Blocks that share `state` reveal together: one of them owns the trigger
/// (`Mount` or `InView`), the others use [`Trigger::Inherit`].
#[component]
pub fn Reveal(
    spec: AnimationSpec,
    #[prop(default = "")] class: &'static str,
    /// Reveal flag shared with other blocks of the same section
    #[prop(optional)]
    state: Option<RwSignal<RevealOnce>>,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let reveal = state.unwrap_or_else(|| RwSignal::new(RevealOnce::new()));
    let observation = StoredValue::new_local(None::<ActiveObservation>);

    on_cleanup(move || {
        let _ = observation.try_update_value(|slot| slot.take());
    });

    Effect::new(move || {
        let Some(element) = node.get() else {
            return;
        };
        if reveal.get_untracked().has_animated() {
            return;
        }
        let fire = move || {
            let _ = reveal.try_update(|r| r.trigger());
        };
        match spec.trigger {
            // Two frames so the initial state is painted before the
            // transition is attached.
            Trigger::Mount => request_animation_frame(move || request_animation_frame(fire)),
            Trigger::InView { .. } => {
                if let Some(active) = observe_once(&element, spec.trigger, fire) {
                    let _ = observation.try_update_value(|slot| *slot = Some(active));
                }
            }
            Trigger::Inherit => {}
        }
    });

    view! {
        <div node_ref=node class=class style=move || reveal.with(|r| r.style(&spec))>
            {children()}
        </div>
    }
}

/// Anything that stops delivering callbacks once disconnected.
trait Disconnect {
    fn disconnect(&self);
}

impl Disconnect for web_sys::IntersectionObserver {
    fn disconnect(&self) {
        web_sys::IntersectionObserver::disconnect(self);
    }
}

/// A live observer and the callback it calls into. Dropping it disconnects
/// the observer before the callback is freed.
struct Observation<O: Disconnect, C> {
    observer: O,
    _callback: C,
}

impl<O: Disconnect, C> Drop for Observation<O, C> {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Call `on_enter` the first time `element` intersects the viewport, then
/// disconnect. The returned observation must outlive the element's mount;
/// dropping it early cancels the reveal.
fn observe_once(
    element: &web_sys::Element,
    trigger: Trigger,
    on_enter: impl Fn() + Clone + 'static,
) -> Option<ActiveObservation> {
    let fallback = on_enter.clone();
    let callback: IntersectionCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let entered = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<web_sys::IntersectionObserverEntry>()
                    .is_intersecting()
            });
            if entered {
                on_enter();
                observer.disconnect();
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    if let Some(margin) = trigger.root_margin() {
        options.set_root_margin(&margin);
    }

    match web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => {
            observer.observe(element);
            Some(Observation {
                observer,
                _callback: callback,
            })
        }
        Err(err) => {
            web_sys::console::warn_2(
                &JsValue::from_str("[nexus][warn] IntersectionObserver unavailable, revealing immediately:"),
                &err,
            );
            fallback();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingObserver(Rc<Cell<u32>>);

    impl Disconnect for CountingObserver {
        fn disconnect(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn clearing_the_slot_disconnects_and_frees_the_callback() {
        let disconnects = Rc::new(Cell::new(0));
        let callback = Rc::new(());
        let mut slot = Some(Observation {
            observer: CountingObserver(disconnects.clone()),
            _callback: callback.clone(),
        });
        assert_eq!(Rc::strong_count(&callback), 2);

        drop(slot.take());
        assert_eq!(disconnects.get(), 1);
        assert_eq!(Rc::strong_count(&callback), 1);

        // Unmounting again after cleanup has nothing left to release.
        drop(slot.take());
        assert_eq!(disconnects.get(), 1);
    }
}
