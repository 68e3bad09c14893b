use yew::prelude::*;

use crate::components::listener::WindowKeys;
use crate::viewer::cycle::Direction;
use crate::viewer::keyboard::KeyboardScope;
use crate::viewer::lightbox::{Lightbox, LightboxAction, MediaItem};

/// Lightbox state over `len` items with keyboard shortcuts bound while open.
#[hook]
pub fn use_lightbox(len: usize) -> UseReducerHandle<Lightbox> {
    let lightbox = use_reducer(move || Lightbox::new(len));
    let keys = use_mut_ref(|| KeyboardScope::new(WindowKeys));

    // The scope is dropped with the hook state, which unbinds on unmount.
    {
        let dispatcher = lightbox.dispatcher();
        let keys = keys.clone();
        use_effect_with_deps(
            move |open_index| {
                keys.borrow_mut().sync(open_index.is_some(), move || {
                    let on_key: Box<dyn FnMut(&str)> = Box::new(move |key: &str| {
                        if let Some(action) = Lightbox::key_action(key) {
                            dispatcher.dispatch(action);
                        }
                    });
                    on_key
                });
                || ()
            },
            lightbox.open_index(),
        );
    }

    lightbox
}

#[derive(Properties, PartialEq)]
pub struct LightboxOverlayProps {
    pub items: &'static [MediaItem],
    pub state: UseReducerHandle<Lightbox>,
}

#[function_component(LightboxOverlay)]
pub fn lightbox_overlay(props: &LightboxOverlayProps) -> Html {
    let Some(index) = props.state.open_index() else {
        return html! {};
    };
    let Some(item) = props.items.get(index) else {
        return html! {};
    };

    let close = {
        let state = props.state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(LightboxAction::Close))
    };
    let step = |direction: Direction| {
        let state = props.state.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            state.dispatch(LightboxAction::Advance(direction));
        })
    };

    html! {
        <div class="lightbox-backdrop" onclick={close.clone()}>
            <button class="lightbox-close" aria-label="Close" onclick={close}>{"×"}</button>
            <button class="lightbox-nav prev" aria-label="Previous image" onclick={step(Direction::Previous)}>
                {"‹"}
            </button>
            <figure class="lightbox-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <img src={item.source} alt={item.caption} />
                <figcaption>
                    <span class="lightbox-caption">{item.caption}</span>
                    <span class="lightbox-position">
                        {props.state.position_label().unwrap_or_default()}
                    </span>
                </figcaption>
            </figure>
            <button class="lightbox-nav next" aria-label="Next image" onclick={step(Direction::Next)}>
                {"›"}
            </button>
            <style>
                {r#"
                .lightbox-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    background: rgba(15, 23, 42, 0.95);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    animation: lightboxFade 0.3s ease-out;
                }
                @keyframes lightboxFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                .lightbox-content {
                    margin: 0;
                    max-width: 85vw;
                    max-height: 85vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .lightbox-content img {
                    max-width: 100%;
                    max-height: 75vh;
                    object-fit: contain;
                }
                .lightbox-content figcaption {
                    margin-top: 1rem;
                    display: flex;
                    gap: 1.5rem;
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.9rem;
                }
                .lightbox-position {
                    color: #c9a961;
                    letter-spacing: 0.1em;
                }
                .lightbox-nav, .lightbox-close {
                    position: absolute;
                    background: transparent;
                    border: 1px solid rgba(201, 169, 97, 0.5);
                    color: #c9a961;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .lightbox-nav {
                    top: 50%;
                    transform: translateY(-50%);
                    width: 3rem;
                    height: 3rem;
                    font-size: 2rem;
                    border-radius: 50%;
                }
                .lightbox-nav:hover, .lightbox-close:hover {
                    background: rgba(201, 169, 97, 0.15);
                }
                .lightbox-nav.prev { left: 2rem; }
                .lightbox-nav.next { right: 2rem; }
                .lightbox-close {
                    top: 1.5rem;
                    right: 1.5rem;
                    width: 2.5rem;
                    height: 2.5rem;
                    font-size: 1.5rem;
                }
                @media (max-width: 768px) {
                    .lightbox-nav.prev { left: 0.5rem; }
                    .lightbox-nav.next { right: 0.5rem; }
                }
                "#}
            </style>
        </div>
    }
}
