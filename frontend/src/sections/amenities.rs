use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealVariant};
use crate::viewer::reveal::RevealOptions;

struct AmenityCategory {
    title: &'static str,
    description: &'static str,
    amenities: &'static [(&'static str, &'static str)],
}

const CATEGORIES: &[AmenityCategory] = &[
    AmenityCategory {
        title: "Healthcare & Wellness",
        description: "Comprehensive care facilities ensuring your well-being is always prioritized.",
        amenities: &[
            ("❤️", "24/7 Nurse Call System"),
            ("🩺", "On-site ETU"),
            ("🧪", "Laboratory"),
            ("💊", "Pharmacy"),
            ("🚑", "Ambulance Service"),
            ("🏋️", "Fitness Centre"),
        ],
    },
    AmenityCategory {
        title: "Lifestyle & Recreation",
        description: "Curated spaces designed for relaxation, entertainment, and community bonding.",
        amenities: &[
            ("🌳", "Rooftop Garden"),
            ("🎮", "Elder Entertainment"),
            ("🏓", "Table Tennis"),
            ("🧸", "Kids Play Area"),
            ("📚", "Mini Library"),
            ("👪", "Daycare & Nursery"),
        ],
    },
    AmenityCategory {
        title: "Convenience",
        description: "Essential services and modern utilities for a seamless, hassle-free lifestyle.",
        amenities: &[
            ("☕", "Ground Floor Café"),
            ("🛒", "Mini Supermarket"),
            ("💼", "Meeting Room"),
            ("🗂️", "Office Cabin"),
            ("⚡", "EV Charging"),
            ("🔋", "Backup Generator"),
        ],
    },
];

#[function_component(Amenities)]
pub fn amenities() -> Html {
    html! {
        <section id="amenities" class="section section-light">
            <div class="container">
                <Reveal options={RevealOptions::section()} class={classes!("section-header")}>
                    <span class="eyebrow">{"Services & Facilities"}</span>
                    <h2 class="section-title navy">
                        {"Curated for "}<span class="gold">{"Comfort"}</span>
                    </h2>
                    <p class="section-lead navy-muted">
                        {"Beyond just amenities, we offer a suite of services designed to make everyday living effortless and enjoyable."}
                    </p>
                </Reveal>

                <div class="service-grid">
                    { for CATEGORIES.iter().enumerate().map(|(cat_index, category)| html! {
                        <Reveal
                            options={RevealOptions::section().staggered(cat_index, 200)}
                            class={classes!("service-card")}
                        >
                            <div class="service-number">{format!("0{}", cat_index + 1)}</div>
                            <div class="service-body">
                                <h3>{category.title}</h3>
                                <p>{category.description}</p>
                                <ul class="service-list">
                                    { for category.amenities.iter().enumerate().map(|(index, (icon, label))| html! {
                                        <li>
                                            <Reveal
                                                variant={RevealVariant::FadeRight}
                                                options={RevealOptions::default()
                                                    .with_delay(300 + 100 * cat_index as u32)
                                                    .staggered(index, 50)}
                                                class={classes!("service-item")}
                                            >
                                                <span class="service-icon">{*icon}</span>
                                                <span>{*label}</span>
                                            </Reveal>
                                        </li>
                                    }) }
                                </ul>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .service-grid {
                    display: grid;
                    gap: 2rem;
                }
                @media (min-width: 768px) {
                    .service-grid {
                        grid-template-columns: repeat(3, 1fr);
                        gap: 3rem;
                    }
                }
                .service-card {
                    position: relative;
                    background: #fff;
                    padding: 2.5rem;
                    border-top: 4px solid #c9a961;
                    box-shadow: 0 10px 40px -10px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.3s ease;
                }
                .service-card:hover {
                    box-shadow: 0 20px 50px -10px rgba(0, 0, 0, 0.1);
                }
                .service-number {
                    position: absolute;
                    top: 1rem;
                    right: 1.5rem;
                    font-family: 'Playfair Display', serif;
                    font-size: 8rem;
                    font-weight: 700;
                    line-height: 1;
                    color: rgba(26, 39, 68, 0.05);
                    pointer-events: none;
                    user-select: none;
                    transition: color 0.5s ease;
                }
                .service-card:hover .service-number {
                    color: rgba(201, 169, 97, 0.1);
                }
                .service-body {
                    position: relative;
                    z-index: 1;
                }
                .service-body h3 {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.5rem;
                    color: #1a2744;
                    margin: 0 0 1rem;
                    transition: color 0.3s ease;
                }
                .service-card:hover h3 {
                    color: #c9a961;
                }
                .service-body > p {
                    color: rgba(26, 39, 68, 0.6);
                    font-size: 0.875rem;
                    line-height: 1.6;
                    min-height: 40px;
                    margin-bottom: 2rem;
                }
                .service-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: grid;
                    gap: 1rem;
                }
                .service-item {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: rgba(26, 39, 68, 0.8);
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .service-icon {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    background: rgba(26, 39, 68, 0.05);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }
                "#}
            </style>
        </section>
    }
}
