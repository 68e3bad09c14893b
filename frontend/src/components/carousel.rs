use log::warn;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::listener::WindowListener;
use crate::viewer::scroll_edges::{ScrollDirection, ScrollEdges, ScrollPosition};

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    #[prop_or_default]
    pub children: Children,
}

fn measure(node: &NodeRef) -> Option<ScrollPosition> {
    let element = node.cast::<Element>()?;
    Some(ScrollPosition {
        offset: f64::from(element.scroll_left()),
        extent: f64::from(element.scroll_width()),
        viewport: f64::from(element.client_width()),
    })
}

fn scroll_by(node: &NodeRef, direction: ScrollDirection) {
    let Some(element) = node.cast::<Element>() else {
        warn!("Carousel scrolled before it was mounted");
        return;
    };
    let options = ScrollToOptions::new();
    options.set_left(direction.delta());
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_by_with_scroll_to_options(&options);
}

/// Horizontally scrolling strip with arrow buttons that disable at the edges.
#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let track = use_node_ref();
    let edges = use_state_eq(ScrollEdges::default);

    {
        let track = track.clone();
        let edges = edges.clone();
        use_effect_with_deps(
            move |_| {
                edges.set(ScrollEdges::from_position(measure(&track)));
                // Width changes move the right edge without a scroll event.
                let listener = WindowListener::add("resize", move |_| {
                    edges.set(ScrollEdges::from_position(measure(&track)));
                });
                move || drop(listener)
            },
            (),
        );
    }

    let onscroll = {
        let track = track.clone();
        let edges = edges.clone();
        Callback::from(move |_: Event| {
            edges.set(ScrollEdges::from_position(measure(&track)));
        })
    };

    let arrow = |direction: ScrollDirection| {
        let track = track.clone();
        Callback::from(move |_: MouseEvent| scroll_by(&track, direction))
    };

    let arrow_class = |enabled: bool| classes!("carousel-arrow", (!enabled).then_some("disabled"));

    html! {
        <div class="carousel">
            <div class="carousel-track" ref={track.clone()} {onscroll}>
                { for props.children.iter().map(|child| html! {
                    <div class="carousel-slide">{child}</div>
                }) }
            </div>
            <div class="carousel-controls">
                <button
                    class={arrow_class(edges.can_scroll_left)}
                    aria-label="Scroll left"
                    disabled={!edges.can_scroll_left}
                    onclick={arrow(ScrollDirection::Left)}
                >
                    {"‹"}
                </button>
                <button
                    class={arrow_class(edges.can_scroll_right)}
                    aria-label="Scroll right"
                    disabled={!edges.can_scroll_right}
                    onclick={arrow(ScrollDirection::Right)}
                >
                    {"›"}
                </button>
            </div>
            <style>
                {r#"
                .carousel-track {
                    display: flex;
                    gap: 1rem;
                    overflow-x: auto;
                    padding: 0 1rem 1rem;
                    margin: 0 -1rem;
                    scroll-snap-type: x mandatory;
                    scrollbar-width: none;
                    -ms-overflow-style: none;
                }
                .carousel-track::-webkit-scrollbar {
                    display: none;
                }
                .carousel-slide {
                    flex-shrink: 0;
                    width: 280px;
                    height: 320px;
                    scroll-snap-align: center;
                }
                .carousel-controls {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }
                .carousel-arrow {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    border: 1px solid #c9a961;
                    background: transparent;
                    color: #c9a961;
                    font-size: 1.5rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .carousel-arrow:hover:not(.disabled) {
                    background: #c9a961;
                    color: #1a2744;
                }
                .carousel-arrow.disabled {
                    border-color: rgba(255, 255, 255, 0.1);
                    color: rgba(255, 255, 255, 0.3);
                    cursor: not-allowed;
                }
                "#}
            </style>
        </div>
    }
}
