use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::viewer::reveal::{next_visible, RevealOptions};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealVariant {
    #[default]
    FadeUp,
    FadeLeft,
    FadeRight,
    FadeIn,
    ScaleIn,
}

impl RevealVariant {
    fn class(self) -> &'static str {
        match self {
            RevealVariant::FadeUp => "reveal-up",
            RevealVariant::FadeLeft => "reveal-left",
            RevealVariant::FadeRight => "reveal-right",
            RevealVariant::FadeIn => "reveal-fade",
            RevealVariant::ScaleIn => "reveal-scale",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub options: RevealOptions,
    #[prop_or_default]
    pub variant: RevealVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Intersection observer plus any pending delayed reveal, released on drop.
struct ScopedObserver {
    observer: IntersectionObserver,
    pending: Rc<RefCell<Option<Timeout>>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ScopedObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.pending.borrow_mut().take();
    }
}

fn observe(
    element: &Element,
    options: RevealOptions,
    visible: UseStateHandle<bool>,
) -> Option<ScopedObserver> {
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();
    let shown = Rc::new(Cell::new(false));

    let callback = Closure::wrap(Box::new({
        let pending = pending.clone();
        move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());

            let next = next_visible(shown.get(), intersecting, options.once);
            if next == shown.get() {
                return;
            }
            shown.set(next);

            if next {
                if options.delay_ms == 0 {
                    visible.set(true);
                } else {
                    let visible = visible.clone();
                    *pending.borrow_mut() =
                        Some(Timeout::new(options.delay_ms, move || visible.set(true)));
                }
                if options.once {
                    observer.disconnect();
                }
            } else {
                pending.borrow_mut().take();
                visible.set(false);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.clamped_threshold()));
    init.set_root_margin(&options.root_margin());

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("IntersectionObserver unavailable, revealing immediately: {:?}", e);
                return None;
            }
        };
    observer.observe(element);

    Some(ScopedObserver {
        observer,
        pending,
        _callback: callback,
    })
}

/// Fades its children in once they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |options| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| observe(&element, *options, visible.clone()));
                if observer.is_none() {
                    visible.set(true);
                }
                move || drop(observer)
            },
            props.options,
        );
    }

    html! {
        <div
            ref={node}
            class={classes!(
                "reveal",
                props.variant.class(),
                (*visible).then_some("is-visible"),
                props.class.clone()
            )}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_its_own_class() {
        let classes = [
            RevealVariant::FadeUp,
            RevealVariant::FadeLeft,
            RevealVariant::FadeRight,
            RevealVariant::FadeIn,
            RevealVariant::ScaleIn,
        ]
        .map(RevealVariant::class);
        assert_eq!(
            classes,
            ["reveal-up", "reveal-left", "reveal-right", "reveal-fade", "reveal-scale"]
        );
        assert_eq!(RevealVariant::default(), RevealVariant::FadeUp);
    }
}
