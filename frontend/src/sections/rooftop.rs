use yew::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::layout::use_layout_mode;
use crate::components::reveal::{Reveal, RevealVariant};
use crate::viewer::reveal::RevealOptions;

#[derive(Clone, Copy)]
enum CardSize {
    Large,
    Medium,
    Small,
}

impl CardSize {
    fn class(self) -> &'static str {
        match self {
            CardSize::Large => "bento-large",
            CardSize::Medium => "bento-medium",
            CardSize::Small => "bento-small",
        }
    }
}

struct RooftopAmenity {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    size: CardSize,
    image: &'static str,
}

const ROOFTOP: &[RooftopAmenity] = &[
    RooftopAmenity {
        id: "fitness",
        name: "Sky Fitness Centre",
        description: "State-of-the-art equipment with panoramic views.",
        icon: "🏋️",
        size: CardSize::Medium,
        image: "/images/amenity-fitness.webp",
    },
    RooftopAmenity {
        id: "zumba",
        name: "Indoor Zumba",
        description: "Dedicated rhythm and dance fitness studio.",
        icon: "🎵",
        size: CardSize::Medium,
        image: "/images/amenity-zumba.webp",
    },
    RooftopAmenity {
        id: "meeting",
        name: "Rentable Meeting Rooms",
        description: "Professional spaces for business gatherings.",
        icon: "📊",
        size: CardSize::Small,
        image: "/images/amenity-meeting.webp",
    },
    RooftopAmenity {
        id: "office",
        name: "Office Cabin Area",
        description: "Private workspaces for remote productivity.",
        icon: "💼",
        size: CardSize::Small,
        image: "/images/office.jpeg",
    },
    RooftopAmenity {
        id: "kids",
        name: "Kids Play Area",
        description: "Safe, engaging fun for little ones.",
        icon: "🧸",
        size: CardSize::Large,
        image: "/images/kids.jpeg",
    },
    RooftopAmenity {
        id: "daycare",
        name: "Daycare & Nursery",
        description: "Trusted care facility for residents' children.",
        icon: "👶",
        size: CardSize::Medium,
        image: "/images/daycare.jpeg",
    },
    RooftopAmenity {
        id: "library",
        name: "Mini Library",
        description: "Quiet haven for book lovers.",
        icon: "📚",
        size: CardSize::Small,
        image: "/images/library.jpeg",
    },
    RooftopAmenity {
        id: "elders",
        name: "Elder's Entertainment",
        description: "Relaxing socialization lounge for seniors.",
        icon: "👥",
        size: CardSize::Small,
        image: "/images/amenity-entertainment.webp",
    },
    RooftopAmenity {
        id: "tt",
        name: "Table Tennis Area",
        description: "Recreation spot for active leisure.",
        icon: "🏓",
        size: CardSize::Small,
        image: "/images/amenity-tennis.webp",
    },
    RooftopAmenity {
        id: "washroom",
        name: "Luxury Washrooms",
        description: "Premium facilities for convenience.",
        icon: "🛁",
        size: CardSize::Small,
        image: "/images/washroom.jpeg",
    },
];

fn amenity_card(amenity: &RooftopAmenity) -> Html {
    html! {
        <div class="rooftop-card">
            <div class="rooftop-card-image">
                <img src={amenity.image} alt={amenity.name} loading="lazy" />
                <div class="rooftop-card-tint"></div>
            </div>
            <div class="rooftop-card-hover"></div>
            <div class="rooftop-card-corner"></div>
            <div class="rooftop-card-body">
                <div class="rooftop-card-icon">{amenity.icon}</div>
                <h3>{amenity.name}</h3>
                <p>{amenity.description}</p>
            </div>
            <div class="rooftop-card-line"><div></div></div>
        </div>
    }
}

#[function_component(Rooftop)]
pub fn rooftop() -> Html {
    let layout = use_layout_mode();

    let amenities = if layout.is_compact() {
        html! {
            <Carousel>
                { for ROOFTOP.iter().enumerate().map(|(index, amenity)| html! {
                    <Reveal
                        key={amenity.id}
                        variant={RevealVariant::FadeLeft}
                        options={RevealOptions::default().staggered(index, 100)}
                        class={classes!("rooftop-slide")}
                    >
                        { amenity_card(amenity) }
                    </Reveal>
                }) }
            </Carousel>
        }
    } else {
        html! {
            <div class="bento-grid">
                { for ROOFTOP.iter().enumerate().map(|(index, amenity)| html! {
                    <Reveal
                        key={amenity.id}
                        variant={RevealVariant::ScaleIn}
                        options={RevealOptions::default().with_offset(-50.0).staggered(index, 100)}
                        class={classes!(amenity.size.class())}
                    >
                        { amenity_card(amenity) }
                    </Reveal>
                }) }
            </div>
        }
    };

    html! {
        <section id="rooftop" class="section section-navy-dark rooftop">
            <div class="container">
                <Reveal variant={RevealVariant::FadeIn} class={classes!("section-header")}>
                    <span class="eyebrow">{"Rooftop Lifestyle"}</span>
                    <h2 class="section-title">
                        {"Elevate Your "}<span class="gold">{"Everyday"}</span>
                    </h2>
                    <p class="section-lead">
                        {"A curated collection of rooftop amenities designed to enhance your lifestyle, leisure, and well-being."}
                    </p>
                </Reveal>

                { amenities }
            </div>

            <style>
                {r#"
                .rooftop {
                    overflow: hidden;
                }
                .bento-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    grid-auto-rows: 250px;
                    gap: 1rem;
                }
                .bento-large { grid-column: span 2; grid-row: span 2; }
                .bento-medium { grid-column: span 1; grid-row: span 2; }
                .bento-small { grid-column: span 1; grid-row: span 1; }
                .rooftop-slide { height: 100%; }
                .rooftop-card {
                    position: relative;
                    height: 100%;
                    background: #1a2744;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 2px;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    overflow: hidden;
                    transition: border-color 0.3s ease, transform 0.3s ease;
                }
                .rooftop-card:hover {
                    border-color: rgba(201, 169, 97, 0.5);
                    transform: scale(1.02);
                }
                .rooftop-card-image {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .rooftop-card-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.6;
                    transition: transform 0.7s ease, opacity 0.7s ease;
                }
                .rooftop-card:hover .rooftop-card-image img {
                    transform: scale(1.1);
                    opacity: 1;
                }
                .rooftop-card-tint {
                    position: absolute;
                    inset: 0;
                    background: rgba(26, 39, 68, 0.6);
                    transition: background 0.3s ease;
                }
                .rooftop-card:hover .rooftop-card-tint {
                    background: rgba(26, 39, 68, 0.3);
                }
                .rooftop-card-hover {
                    position: absolute;
                    inset: 0;
                    z-index: 1;
                    background: linear-gradient(to bottom, rgba(26, 39, 68, 0.2), rgba(26, 39, 68, 0.6), rgba(26, 39, 68, 0.9));
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .rooftop-card:hover .rooftop-card-hover {
                    opacity: 1;
                }
                .rooftop-card-corner {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 4rem;
                    height: 4rem;
                    z-index: 2;
                    border-top: 1px solid rgba(201, 169, 97, 0.2);
                    border-right: 1px solid rgba(201, 169, 97, 0.2);
                }
                .rooftop-card-body,
                .rooftop-card-line {
                    position: relative;
                    z-index: 2;
                }
                .rooftop-card-icon {
                    width: 3rem;
                    height: 3rem;
                    background: rgba(201, 169, 97, 0.1);
                    border-radius: 2px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1rem;
                    font-size: 1.25rem;
                }
                .rooftop-card h3 {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.25rem;
                    color: #fff;
                    margin: 0 0 0.5rem;
                    line-height: 1.25;
                }
                .rooftop-card p {
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.875rem;
                    line-height: 1.6;
                    margin: 0;
                }
                .rooftop-card-line {
                    margin-top: 1rem;
                }
                .rooftop-card-line div {
                    width: 3rem;
                    height: 1px;
                    background: rgba(201, 169, 97, 0.3);
                    transition: width 0.5s ease, background 0.5s ease;
                }
                .rooftop-card:hover .rooftop-card-line div {
                    width: 100%;
                    background: rgba(201, 169, 97, 0.5);
                }
                "#}
            </style>
        </section>
    }
}
