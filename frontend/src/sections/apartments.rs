use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::viewer::reveal::RevealOptions;

struct Apartment {
    id: u32,
    name: &'static str,
    size: &'static str,
    unit: &'static str,
    bedrooms: u32,
    bathrooms: u32,
    features: &'static [&'static str],
    description: &'static str,
    image: &'static str,
}

const APARTMENTS: &[Apartment] = &[
    Apartment {
        id: 1,
        name: "Two Bedroom",
        size: "1,012 - 1,324",
        unit: "Sq.Ft",
        bedrooms: 2,
        bathrooms: 2,
        features: &["Balcony", "City Views"],
        description: "Perfect for young professionals and small families seeking modern comfort with stunning views.",
        image: "/images/apt-2bed.webp",
    },
    Apartment {
        id: 2,
        name: "Three Bedroom",
        size: "1,420 - 1,529",
        unit: "Sq.Ft",
        bedrooms: 3,
        bathrooms: 2,
        features: &["Balcony", "Sea Views"],
        description: "Spacious living for growing families who appreciate luxury, space, and panoramic vistas.",
        image: "/images/apt-3bed.webp",
    },
    Apartment {
        id: 3,
        name: "Special Garden",
        size: "1,115",
        unit: "Sq.Ft",
        bedrooms: 2,
        bathrooms: 2,
        features: &["Private Garden", "Premium Finish"],
        description: "Exclusive apartments with private garden spaces for seamless indoor-outdoor living.",
        image: "/images/apt-special.webp",
    },
];

#[function_component(Apartments)]
pub fn apartments() -> Html {
    html! {
        <section id="apartments" class="section section-navy">
            <div class="container">
                <Reveal options={RevealOptions::section()} class={classes!("section-header")}>
                    <span class="eyebrow">{"Apartments"}</span>
                    <h2 class="section-title">{"Residences Designed for Distinction"}</h2>
                    <p class="section-lead">
                        {"Each apartment is thoughtfully planned to deliver a seamless balance of privacy, comfort, and sophistication."}
                    </p>
                </Reveal>

                <div class="apartment-grid">
                    { for APARTMENTS.iter().enumerate().map(|(index, apt)| html! {
                        <Reveal
                            key={apt.id}
                            options={RevealOptions::section().staggered(index, 100)}
                            class={classes!("apartment-card")}
                        >
                            <div class="apartment-image">
                                <img src={apt.image} alt={apt.name} loading="lazy" />
                                <div class="apartment-badge">{apt.name}</div>
                            </div>
                            <div class="apartment-body">
                                <div class="apartment-size">
                                    <span class="size">{apt.size}</span>
                                    <span class="unit">{apt.unit}</span>
                                </div>
                                <div class="apartment-rooms">
                                    <span>{format!("🛏 {} Beds", apt.bedrooms)}</span>
                                    <span>{format!("🛁 {} Baths", apt.bathrooms)}</span>
                                </div>
                                <p>{apt.description}</p>
                                <div class="apartment-tags">
                                    { for apt.features.iter().map(|feature| html! {
                                        <span key={*feature}>{*feature}</span>
                                    }) }
                                </div>
                                <a href="#contact" class="apartment-cta">
                                    <span>{"Inquire Now"}</span>
                                    <span class="gold">{"→"}</span>
                                </a>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .apartment-grid {
                    display: grid;
                    gap: 2rem;
                }
                @media (min-width: 768px) {
                    .apartment-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .apartment-grid { grid-template-columns: repeat(3, 1fr); }
                }
                .apartment-card {
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(4px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.2);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .apartment-card:hover {
                    transform: translateY(-0.5rem);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.4);
                }
                .apartment-image {
                    position: relative;
                    overflow: hidden;
                }
                .apartment-image img {
                    width: 100%;
                    height: 16rem;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .apartment-card:hover .apartment-image img {
                    transform: scale(1.08);
                }
                .apartment-badge {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    background: #c9a961;
                    color: #1a2744;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .apartment-body {
                    padding: 1.5rem;
                }
                .apartment-size {
                    display: flex;
                    align-items: baseline;
                    gap: 0.25rem;
                    margin-bottom: 1rem;
                }
                .apartment-size .size {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #fff;
                }
                .apartment-size .unit,
                .apartment-rooms {
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.875rem;
                }
                .apartment-rooms {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }
                .apartment-body p {
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 0.875rem;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }
                .apartment-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .apartment-tags span {
                    padding: 0.25rem 0.75rem;
                    background: rgba(255, 255, 255, 0.1);
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.75rem;
                }
                .apartment-cta {
                    display: inline-flex;
                    gap: 0.5rem;
                    color: #fff;
                    font-weight: 500;
                    text-decoration: none;
                }
                .apartment-cta:hover span:first-child {
                    border-bottom: 1px solid #c9a961;
                }
                "#}
            </style>
        </section>
    }
}
