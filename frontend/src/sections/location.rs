use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealVariant};
use crate::viewer::reveal::RevealOptions;

const HIGHLIGHTS: &[(&str, &str, &str)] = &[
    ("🌊", "Panoramic Views", "Sea, Lagoon & Bolgoda Lake"),
    ("🏙️", "City Access", "Close proximity to Colombo"),
    ("🚗", "Connectivity", "Major transport routes"),
    ("🎓", "Education", "Nearby schools & colleges"),
    ("🩺", "Healthcare", "Hospitals & clinics"),
    ("📍", "Convenience", "Shopping & entertainment"),
];

#[function_component(Location)]
pub fn location() -> Html {
    html! {
        <section id="location" class="section section-cream">
            <div class="container location-grid">
                <Reveal
                    variant={RevealVariant::FadeLeft}
                    options={RevealOptions::section()}
                    class={classes!("location-visual")}
                >
                    <div class="location-frame">
                        <div class="location-border"></div>
                        <div class="location-image">
                            <img src="/images/location.webp" alt="Rooftop view with sea and landscape" loading="lazy" />
                        </div>
                        <Reveal
                            variant={RevealVariant::ScaleIn}
                            options={RevealOptions::section().with_delay(400)}
                            class={classes!("location-badge")}
                        >
                            {"📍"}
                        </Reveal>
                    </div>
                </Reveal>

                <div class="location-text">
                    <Reveal options={RevealOptions::section()}>
                        <span class="eyebrow">{"Location"}</span>
                        <h2 class="section-title navy">
                            {"Rathmalana,"}
                            <br />
                            {"Sri Lanka"}
                        </h2>
                        <p class="location-lead">
                            {"Perfectly positioned to offer the best of both worlds - tranquil coastal living with easy city access. \
                              Rainbow Apartments provides a serene retreat while keeping you connected to everything you need."}
                        </p>
                    </Reveal>

                    <div class="highlight-grid">
                        { for HIGHLIGHTS.iter().enumerate().map(|(index, (icon, title, description))| html! {
                            <Reveal
                                key={*title}
                                options={RevealOptions::section().with_delay(300).staggered(index, 50)}
                                class={classes!("highlight")}
                            >
                                <div class="highlight-icon">{*icon}</div>
                                <h4>{*title}</h4>
                                <p>{*description}</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .location-grid {
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }
                @media (min-width: 1024px) {
                    .location-grid {
                        grid-template-columns: 1fr 1fr;
                        gap: 5rem;
                    }
                    .location-visual { order: 1; }
                    .location-text { order: 2; }
                }
                .location-visual { order: 2; }
                .location-text { order: 1; }
                .location-frame {
                    position: relative;
                }
                .location-border {
                    position: absolute;
                    bottom: -1rem;
                    right: -1rem;
                    width: 100%;
                    height: 100%;
                    border: 2px solid #c9a961;
                }
                .location-image {
                    position: relative;
                    overflow: hidden;
                }
                .location-image img {
                    width: 100%;
                    height: 400px;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .location-image:hover img {
                    transform: scale(1.05);
                }
                @media (min-width: 1024px) {
                    .location-image img { height: 500px; }
                }
                .location-badge {
                    position: absolute;
                    top: -1rem;
                    left: -1rem;
                    background: #c9a961;
                    padding: 1rem;
                    font-size: 1.5rem;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.2);
                }
                .location-lead {
                    color: rgba(51, 51, 51, 0.8);
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }
                .highlight-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                }
                @media (min-width: 640px) {
                    .highlight-grid { grid-template-columns: repeat(3, 1fr); }
                }
                .highlight {
                    text-align: center;
                    padding: 1rem;
                    background: #fff;
                    transition: background 0.3s ease;
                }
                .highlight:hover {
                    background: #1a2744;
                }
                .highlight-icon {
                    font-size: 1.5rem;
                    margin-bottom: 0.5rem;
                }
                .highlight h4 {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #1a2744;
                    margin: 0 0 0.25rem;
                    transition: color 0.3s ease;
                }
                .highlight p {
                    font-size: 0.75rem;
                    color: rgba(51, 51, 51, 0.6);
                    margin: 0;
                    transition: color 0.3s ease;
                }
                .highlight:hover h4 { color: #fff; }
                .highlight:hover p { color: rgba(255, 255, 255, 0.7); }
                "#}
            </style>
        </section>
    }
}
