use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealVariant};
use crate::viewer::reveal::RevealOptions;

struct Floor {
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    icon: &'static str,
    image: &'static str,
    features: &'static [&'static str],
}

const FLOORS: &[Floor] = &[
    Floor {
        id: "ground",
        title: "Ground Floor",
        subtitle: "The Arrival",
        description: "Accessibility & Convenience",
        icon: "🏠",
        image: "/images/floor-ground.webp",
        features: &[
            "Smooth vehicular access via dedicated arrival ramp",
            "Well-planned parking areas for residents and visitors",
            "EV charging points supporting sustainable mobility",
            "Essential building services including backup generator",
            "Air-conditioned reception lobby with TV lounge",
            "Convenient on-site mini supermarket",
            "Café for everyday dining and casual meetings",
        ],
    },
    Floor {
        id: "first",
        title: "1st Floor",
        subtitle: "Services & Wellness",
        description: "Lifestyle & Healthcare Hub",
        icon: "❤️",
        image: "/images/floor-first.webp",
        features: &[
            "Dedicated 1st floor layout designed for wellness and essential services",
            "Fully equipped ETU (Emergency Treatment Unit)",
            "On-site Laboratory for diagnostic services",
            "Pharmacy for everyday medical needs",
            "Channeling Centre for specialist consultations",
            "Cafeteria and Mini-Café for comfort and convenience",
            "Ambulance access for emergency response",
        ],
    },
    Floor {
        id: "second",
        title: "2nd Floor",
        subtitle: "Operational Excellence",
        description: "Building Services Hub",
        icon: "⚡",
        image: "/images/floor-second.webp",
        features: &[
            "Dedicated second-floor layout designed to support essential building services",
            "Solar System for energy-efficient and sustainable operations",
            "Accessible parking for differently-abled users",
            "Backup generator ensuring uninterrupted power supply",
            "Well-maintained washroom facilities",
            "Dedicated laundry area for operational convenience",
        ],
    },
    Floor {
        id: "third",
        title: "3rd Floor",
        subtitle: "Special Apartments",
        description: "1115.57 Sq.Ft | Private Garden Spaces",
        icon: "🌿",
        image: "/images/floor-third.webp",
        features: &[
            "Additional floor area offering enhanced spatial flexibility",
            "Exclusive apartments designed with private garden spaces",
            "Seamless indoor–outdoor living experience",
            "Ideal balance of privacy, openness, and luxury",
            "Includes: Living & Dining, Master Washroom, Pantry & Kitchen, Master Bedroom",
        ],
    },
];

fn floor_card(index: usize, floor: &Floor) -> Html {
    // Alternate the image side on wide screens.
    let row_class = if index % 2 == 0 { "floor-row" } else { "floor-row reversed" };

    html! {
        <div key={floor.id} class="floor-card">
            <div class="container">
                <div class={row_class}>
                    <div class="floor-text">
                        <Reveal>
                            <div class="floor-heading">
                                <span class="floor-icon">{floor.icon}</span>
                                <span class="floor-subtitle">{floor.subtitle}</span>
                            </div>
                            <h2>{floor.title}</h2>
                            <p class="floor-description">{floor.description}</p>
                            <ul class="floor-features">
                                { for floor.features.iter().enumerate().map(|(i, feature)| html! {
                                    <li>
                                        <Reveal
                                            variant={RevealVariant::FadeRight}
                                            options={RevealOptions::default().staggered(i, 100)}
                                            class={classes!("floor-feature")}
                                        >
                                            <span class="gold">{"✓"}</span>
                                            <span>{*feature}</span>
                                        </Reveal>
                                    </li>
                                }) }
                            </ul>
                        </Reveal>
                    </div>
                    <div class="floor-image">
                        <Reveal variant={RevealVariant::ScaleIn}>
                            <div class="floor-frame">
                                <img src={floor.image} alt={floor.title} loading="lazy" />
                                <div class="floor-frame-border"></div>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(FloorGuide)]
pub fn floor_guide() -> Html {
    html! {
        <section id="floors" class="floor-guide">
            <div class="floor-guide-header">
                <Reveal options={RevealOptions::section()} class={classes!("section-header")}>
                    <span class="eyebrow">{"Floor Guide"}</span>
                    <h2 class="section-title">{"Explore Our Spaces"}</h2>
                    <p class="section-lead">
                        {"Navigate through the levels of luxury. From the welcoming ground floor to the exclusive private gardens above, discover a layout designed for modern living."}
                    </p>
                </Reveal>
            </div>

            { for FLOORS.iter().enumerate().map(|(index, floor)| floor_card(index, floor)) }

            <style>
                {r#"
                .floor-guide {
                    position: relative;
                    background: #1a2744;
                }
                .floor-guide-header {
                    position: relative;
                    z-index: 10;
                    padding: 6rem 1.5rem 2.5rem;
                }
                .floor-card {
                    position: sticky;
                    top: 0;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding: 5rem 0;
                    background: #1a2744;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .floor-row {
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }
                @media (min-width: 1024px) {
                    .floor-row { flex-direction: row; }
                    .floor-row.reversed { flex-direction: row-reverse; }
                    .floor-text { width: 50%; padding-top: 6rem; }
                    .floor-image { width: 40%; }
                }
                .floor-heading {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .floor-icon {
                    border: 1px solid #c9a961;
                    border-radius: 50%;
                    padding: 0.75rem;
                    line-height: 1;
                }
                .floor-subtitle {
                    color: rgba(255, 255, 255, 0.6);
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    font-size: 0.875rem;
                }
                .floor-text h2 {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    color: #fff;
                    margin: 0 0 1.5rem;
                }
                .floor-description {
                    font-size: 1.25rem;
                    color: rgba(255, 255, 255, 0.8);
                    font-weight: 300;
                    font-style: italic;
                    margin-bottom: 2rem;
                }
                .floor-features {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    gap: 1rem;
                }
                .floor-feature {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    color: rgba(255, 255, 255, 0.8);
                    font-weight: 300;
                }
                .floor-frame {
                    position: relative;
                    aspect-ratio: 3 / 4;
                    overflow: hidden;
                    border-radius: 2px;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.3);
                }
                .floor-frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .floor-frame:hover img {
                    transform: scale(1.05);
                }
                .floor-frame-border {
                    position: absolute;
                    inset: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    pointer-events: none;
                }
                "#}
            </style>
        </section>
    }
}
