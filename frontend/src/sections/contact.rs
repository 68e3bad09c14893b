use log::{info, warn};
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealVariant};
use crate::config::{CONTACT_EMAIL, CONTACT_PHONE_DISPLAY, CONTACT_PHONE_LINK, WHATSAPP_LINK};
use crate::error::ContactError;
use crate::viewer::reveal::RevealOptions;

const ACKNOWLEDGMENT: &str = "Thank you for your inquiry! We will contact you soon.";

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactInquiry {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("full name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField("email address"));
        }
        match self.email.trim().split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => {}
            _ => return Err(ContactError::InvalidEmail),
        }
        if self.phone.trim().is_empty() {
            return Err(ContactError::MissingField("phone number"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy)]
enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    fn set(self, inquiry: &mut ContactInquiry, value: String) {
        match self {
            Field::Name => inquiry.name = value,
            Field::Email => inquiry.email = value,
            Field::Phone => inquiry.phone = value,
            Field::Message => inquiry.message = value,
        }
    }
}

/// Logs the inquiry to the console and acknowledges it with an alert.
fn acknowledge(inquiry: &ContactInquiry) {
    match serde_json::to_string(inquiry) {
        Ok(json) => gloo_console::log!("Form submitted:", json),
        Err(e) => warn!("Failed to serialize inquiry: {}", e),
    }
    info!("Contact inquiry acknowledged");

    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(ACKNOWLEDGMENT) {
            warn!("Failed to show acknowledgment: {:?}", e);
        }
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let inquiry = use_state(ContactInquiry::default);
    let error = use_state(|| None::<ContactError>);

    let on_input = |field: Field| {
        let inquiry = inquiry.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                Field::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            let mut next = (*inquiry).clone();
            field.set(&mut next, value);
            inquiry.set(next);
        })
    };

    let onsubmit = {
        let inquiry = inquiry.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match inquiry.validate() {
                Ok(()) => {
                    acknowledge(&inquiry);
                    inquiry.set(ContactInquiry::default());
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        })
    };

    html! {
        <section id="contact" class="section section-navy">
            <div class="container contact-grid">
                <Reveal options={RevealOptions::section()}>
                    <span class="eyebrow">{"Contact Us"}</span>
                    <h2 class="section-title">{"Begin Your Journey Home"}</h2>
                    <p class="contact-lead">
                        {"Schedule a visit to experience Rainbow Apartments in person. Our team is ready to assist you in finding your perfect home."}
                    </p>

                    <form class="contact-form" {onsubmit}>
                        <div class="form-row">
                            <div class="form-field">
                                <label for="name">{"Full Name"}</label>
                                <input
                                    id="name"
                                    type="text"
                                    placeholder="John Doe"
                                    required={true}
                                    value={inquiry.name.clone()}
                                    oninput={on_input(Field::Name)}
                                />
                            </div>
                            <div class="form-field">
                                <label for="email">{"Email Address"}</label>
                                <input
                                    id="email"
                                    type="email"
                                    placeholder="john@example.com"
                                    required={true}
                                    value={inquiry.email.clone()}
                                    oninput={on_input(Field::Email)}
                                />
                            </div>
                        </div>
                        <div class="form-field">
                            <label for="phone">{"Phone Number"}</label>
                            <input
                                id="phone"
                                type="tel"
                                placeholder={CONTACT_PHONE_DISPLAY}
                                required={true}
                                value={inquiry.phone.clone()}
                                oninput={on_input(Field::Phone)}
                            />
                        </div>
                        <div class="form-field">
                            <label for="message">{"Message"}</label>
                            <textarea
                                id="message"
                                rows="4"
                                placeholder="Tell us about your requirements..."
                                value={inquiry.message.clone()}
                                oninput={on_input(Field::Message)}
                            />
                        </div>
                        {
                            if let Some(error) = &*error {
                                html! { <p class="form-error">{error.to_string()}</p> }
                            } else {
                                html! {}
                            }
                        }
                        <button type="submit" class="btn-gold contact-submit">{"✉ Send Inquiry"}</button>
                    </form>
                </Reveal>

                <Reveal
                    variant={RevealVariant::FadeLeft}
                    options={RevealOptions::section().with_delay(200)}
                    class={classes!("contact-info-wrap")}
                >
                    <div class="contact-info">
                        <h3>{"Get in Touch"}</h3>
                        <div class="contact-item">
                            <div class="contact-icon">{"📞"}</div>
                            <div>
                                <h4>{"Phone"}</h4>
                                <a href={CONTACT_PHONE_LINK}>{CONTACT_PHONE_DISPLAY}</a>
                            </div>
                        </div>
                        <div class="contact-item">
                            <div class="contact-icon">{"✉️"}</div>
                            <div>
                                <h4>{"Email"}</h4>
                                <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                            </div>
                        </div>
                        <div class="contact-item">
                            <div class="contact-icon">{"📍"}</div>
                            <div>
                                <h4>{"Address"}</h4>
                                <p>{"Rathmalana, Sri Lanka"}<br />{"Near Bolgoda Lake"}</p>
                            </div>
                        </div>
                        <div class="contact-whatsapp">
                            <h4>{"Prefer WhatsApp?"}</h4>
                            <a href={WHATSAPP_LINK} target="_blank" rel="noopener noreferrer" class="whatsapp-button">
                                {"💬 Chat on WhatsApp"}
                            </a>
                        </div>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    gap: 3rem;
                }
                @media (min-width: 1024px) {
                    .contact-grid {
                        grid-template-columns: 1fr 1fr;
                        gap: 5rem;
                    }
                    .contact-info-wrap { padding-left: 3rem; }
                }
                .contact-lead {
                    color: rgba(255, 255, 255, 0.7);
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }
                .contact-form {
                    display: grid;
                    gap: 1.5rem;
                }
                .form-row {
                    display: grid;
                    gap: 1.5rem;
                }
                @media (min-width: 640px) {
                    .form-row { grid-template-columns: 1fr 1fr; }
                }
                .form-field {
                    display: grid;
                    gap: 0.5rem;
                }
                .form-field label {
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.875rem;
                }
                .form-field input,
                .form-field textarea {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: #fff;
                    padding: 0.75rem 1rem;
                    font: inherit;
                    resize: none;
                }
                .form-field input::placeholder,
                .form-field textarea::placeholder {
                    color: rgba(255, 255, 255, 0.4);
                }
                .form-field input:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: #c9a961;
                }
                .form-error {
                    color: #f87171;
                    font-size: 0.875rem;
                    margin: 0;
                }
                .contact-submit {
                    width: 100%;
                    padding: 1.25rem;
                    border: none;
                    cursor: pointer;
                }
                .contact-info {
                    background: rgba(255, 255, 255, 0.05);
                    padding: 3rem;
                    height: 100%;
                }
                .contact-info h3 {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.5rem;
                    color: #fff;
                    margin: 0 0 2rem;
                }
                .contact-item {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .contact-icon {
                    width: 3rem;
                    height: 3rem;
                    background: rgba(201, 169, 97, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }
                .contact-info h4 {
                    color: #fff;
                    font-weight: 500;
                    margin: 0 0 0.25rem;
                }
                .contact-item a,
                .contact-item p {
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                    margin: 0;
                    transition: color 0.3s ease;
                }
                .contact-item a:hover {
                    color: #c9a961;
                }
                .contact-whatsapp {
                    margin-top: 2.5rem;
                    padding-top: 2.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .contact-whatsapp h4 {
                    margin-bottom: 1rem;
                }
                .whatsapp-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem 1.5rem;
                    background: #16a34a;
                    color: #fff;
                    font-weight: 500;
                    text-decoration: none;
                    transition: background 0.3s ease;
                    animation: pulseGold 2s ease-in-out infinite;
                }
                .whatsapp-button:hover {
                    background: #15803d;
                }
                @keyframes pulseGold {
                    0%, 100% { box-shadow: 0 0 0 0 rgba(201, 169, 97, 0.4); }
                    50% { box-shadow: 0 0 0 10px rgba(201, 169, 97, 0); }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactInquiry {
        ContactInquiry {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "+94 70 707 4470".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn message_is_optional() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        let inquiry = ContactInquiry {
            name: "   ".to_string(),
            ..filled()
        };
        assert_eq!(
            inquiry.validate(),
            Err(ContactError::MissingField("full name"))
        );

        let inquiry = ContactInquiry {
            email: String::new(),
            ..filled()
        };
        assert_eq!(
            inquiry.validate(),
            Err(ContactError::MissingField("email address"))
        );

        let inquiry = ContactInquiry {
            phone: String::new(),
            ..filled()
        };
        assert_eq!(
            inquiry.validate(),
            Err(ContactError::MissingField("phone number"))
        );
    }

    #[test]
    fn email_needs_both_sides_of_at() {
        for email in ["john.example.com", "@example.com", "john@"] {
            let inquiry = ContactInquiry {
                email: email.to_string(),
                ..filled()
            };
            assert_eq!(inquiry.validate(), Err(ContactError::InvalidEmail), "{}", email);
        }
    }

    #[test]
    fn fields_update_and_reset() {
        let mut inquiry = ContactInquiry::default();
        Field::Name.set(&mut inquiry, "Ann".to_string());
        Field::Message.set(&mut inquiry, "Two bedroom".to_string());
        assert_eq!(inquiry.name, "Ann");
        assert_eq!(inquiry.message, "Two bedroom");

        inquiry = ContactInquiry::default();
        assert!(inquiry.name.is_empty() && inquiry.message.is_empty());
    }

    #[test]
    fn inquiry_serializes_for_the_console() {
        let json = serde_json::to_string(&filled()).unwrap();
        assert!(json.contains("\"name\":\"John Doe\""));
        assert!(json.contains("\"message\":\"\""));
    }

    #[test]
    fn errors_render_readable_messages() {
        assert_eq!(
            ContactError::MissingField("phone number").to_string(),
            "Please enter your phone number."
        );
    }
}
