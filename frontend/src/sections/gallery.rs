use yew::prelude::*;

use crate::components::lightbox::{use_lightbox, LightboxOverlay};
use crate::components::reveal::Reveal;
use crate::viewer::lightbox::{LightboxAction, MediaItem};
use crate::viewer::reveal::RevealOptions;

const GALLERY: &[MediaItem] = &[
    MediaItem {
        source: "/images/gallery-1.webp",
        caption: "Living Room",
    },
    MediaItem {
        source: "/images/gallery-2.webp",
        caption: "Dining Room",
    },
    MediaItem {
        source: "/images/apt-2bed.webp",
        caption: "Two Bedroom Interior",
    },
    MediaItem {
        source: "/images/apt-3bed.webp",
        caption: "Three Bedroom Interior",
    },
    MediaItem {
        source: "/images/apt-special.webp",
        caption: "Special Garden Apartment",
    },
];

/// Grid span per tile, parallel to `GALLERY`. The first image is the feature tile.
fn tile_span(index: usize) -> &'static str {
    if index == 0 {
        "tile-feature"
    } else {
        "tile-single"
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let lightbox = use_lightbox(GALLERY.len());

    html! {
        <section id="gallery" class="section section-light">
            <div class="container">
                <Reveal options={RevealOptions::section()} class={classes!("section-header")}>
                    <span class="eyebrow">{"Gallery"}</span>
                    <h2 class="section-title navy">{"Step Inside Your New Home"}</h2>
                    <p class="section-lead navy-muted">
                        {"Experience the warmth and sophistication of Rainbow Apartments interiors, designed with meticulous attention to detail."}
                    </p>
                </Reveal>

                <div class="gallery-grid">
                    { for GALLERY.iter().enumerate().map(|(index, item)| {
                        let onclick = {
                            let lightbox = lightbox.clone();
                            Callback::from(move |_: MouseEvent| lightbox.dispatch(LightboxAction::Open(index)))
                        };
                        html! {
                            <Reveal
                                key={item.caption}
                                options={RevealOptions::section().staggered(index, 100)}
                                class={classes!("gallery-tile", tile_span(index))}
                            >
                                <button class="gallery-open" aria-label={format!("View {}", item.caption)} {onclick}>
                                    <img src={item.source} alt={item.caption} loading="lazy" />
                                    <div class="gallery-shade"></div>
                                    <div class="gallery-zoom">{"🔍"}</div>
                                </button>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>

            <LightboxOverlay items={GALLERY} state={lightbox} />

            <style>
                {r#"
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    grid-auto-rows: 200px;
                    gap: 1rem;
                }
                @media (min-width: 768px) {
                    .gallery-grid {
                        grid-template-columns: repeat(4, 1fr);
                        grid-auto-rows: 250px;
                    }
                }
                .gallery-tile.tile-feature {
                    grid-column: span 2;
                    grid-row: span 2;
                }
                .gallery-tile {
                    position: relative;
                    overflow: hidden;
                }
                .gallery-open {
                    display: block;
                    width: 100%;
                    height: 100%;
                    padding: 0;
                    border: none;
                    background: none;
                    cursor: zoom-in;
                    position: relative;
                }
                .gallery-open img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }
                .gallery-open:hover img {
                    transform: scale(1.1);
                }
                .gallery-shade {
                    position: absolute;
                    inset: 0;
                    background: rgba(26, 39, 68, 0);
                    transition: background 0.3s ease;
                }
                .gallery-open:hover .gallery-shade {
                    background: rgba(26, 39, 68, 0.4);
                }
                .gallery-zoom {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .gallery-open:hover .gallery-zoom,
                .gallery-open:focus-visible .gallery-zoom {
                    opacity: 1;
                }
                "#}
            </style>
        </section>
    }
}
