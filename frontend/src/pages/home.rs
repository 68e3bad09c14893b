use yew::prelude::*;

use crate::sections::{
    amenities::Amenities, apartments::Apartments, contact::Contact, floor_guide::FloorGuide,
    footer::Footer, gallery::Gallery, hero::Hero, location::Location, rooftop::Rooftop,
};

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <Hero />
            <Amenities />
            <FloorGuide />
            <Apartments />
            <Gallery />
            <Rooftop />
            <Location />
            <Contact />
            <Footer />
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: 'Inter', -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    background: #1a2744;
                    color: #333;
                }
                .container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                @media (min-width: 640px) {
                    .container { padding: 0 1.5rem; }
                }
                @media (min-width: 1024px) {
                    .container { padding: 0 2rem; }
                }
                .section {
                    padding: 6rem 0;
                }
                @media (min-width: 1024px) {
                    .section { padding: 8rem 0; }
                }
                .section-light { background: #fff; }
                .section-cream { background: #f8f5f0; }
                .section-navy { background: #1a2744; }
                .section-navy-dark { background: #111a2e; }
                .section-header {
                    text-align: center;
                    max-width: 42rem;
                    margin: 0 auto 4rem;
                }
                .eyebrow {
                    display: block;
                    color: #c9a961;
                    font-size: 0.875rem;
                    font-weight: 600;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }
                .gold { color: #c9a961; }
                .section-title {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 700;
                    color: #fff;
                    margin: 1rem 0 1.5rem;
                }
                .section-title.navy { color: #1a2744; }
                .section-lead {
                    color: rgba(255, 255, 255, 0.7);
                    line-height: 1.7;
                    font-size: 1.05rem;
                }
                .section-lead.navy-muted { color: rgba(26, 39, 68, 0.7); }
                .btn-gold, .btn-outline {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    font-weight: 500;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .btn-gold {
                    background: #c9a961;
                    color: #1a2744;
                }
                .btn-gold:hover { background: #d9be85; }
                .btn-outline {
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    color: #fff;
                }
                .btn-outline:hover {
                    background: rgba(255, 255, 255, 0.1);
                    border-color: rgba(255, 255, 255, 0.5);
                }

                /* reveal-on-visible */
                .reveal {
                    opacity: 0;
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }
                .reveal-up { transform: translateY(30px); }
                .reveal-left { transform: translateX(50px); }
                .reveal-right { transform: translateX(-20px); }
                .reveal-fade { transform: none; }
                .reveal-scale { transform: scale(0.9); }
                .reveal.is-visible {
                    opacity: 1;
                    transform: none;
                }
                @media (prefers-reduced-motion: reduce) {
                    .reveal {
                        opacity: 1;
                        transform: none;
                        transition: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
