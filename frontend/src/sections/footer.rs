use chrono::Datelike;
use yew::prelude::*;

use crate::config::{CONTACT_EMAIL, CONTACT_PHONE_DISPLAY, CONTACT_PHONE_LINK};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-content">
                <div class="footer-brand">
                    <span class="footer-logo">{"Rainbow "}<span class="gold">{"Apartments"}</span></span>
                    <p>{"Luxury Living in Rathmalana"}</p>
                </div>
                <div class="footer-links">
                    <a href={CONTACT_PHONE_LINK}>{CONTACT_PHONE_DISPLAY}</a>
                    <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                </div>
                <p class="footer-copy">{format!("© {} Rainbow Apartments. All rights reserved.", year)}</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #111a2e;
                    padding: 3rem 0;
                    border-top: 1px solid rgba(201, 169, 97, 0.2);
                }
                .footer-content {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1.5rem;
                }
                .footer-logo {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.5rem;
                    color: #fff;
                }
                .footer-brand p {
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 0.875rem;
                    margin: 0.25rem 0 0;
                }
                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }
                .footer-links a {
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                    font-size: 0.875rem;
                }
                .footer-links a:hover {
                    color: #c9a961;
                }
                .footer-copy {
                    width: 100%;
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 0.75rem;
                    margin: 0;
                }
                "#}
            </style>
        </footer>
    }
}
