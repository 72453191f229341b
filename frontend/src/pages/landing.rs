use yew::prelude::*;

use crate::components::faq::{FaqAccordion, FaqEntry};
use crate::components::footer::Footer;
use crate::components::marquee::Marquee;
use crate::components::reveal::use_scroll_reveal;
use crate::components::trial_form::TrialForm;

/// (question, answer, open on load)
pub const FAQ_ENTRIES: &[(&str, &str, bool)] = &[
    (
        "How does the free trial work?",
        "Enter your WhatsApp number and we'll message you a 7-day pass. Ride as often as you like on any route, no card needed.",
        true,
    ),
    (
        "Which routes do you cover?",
        "We run fixed morning and evening routes between the main residential areas and business parks. New routes open every month based on demand.",
        false,
    ),
    (
        "How do I book a seat?",
        "Everything happens on WhatsApp. Reply with your pickup stop and time and you'll get a confirmed seat with the bus number.",
        false,
    ),
    (
        "What if I miss my bus?",
        "Message us and we'll move your seat to the next bus on the same route at no extra cost.",
        false,
    ),
    (
        "Can I cancel my monthly pass?",
        "Yes. Cancel anytime before the next billing date and you won't be charged again.",
        false,
    ),
];

pub const MARQUEE_STOPS: &[&str] = &[
    "Whitefield", "Electronic City", "Koramangala", "HSR Layout", "Marathahalli",
    "Indiranagar", "Hebbal", "Manyata Tech Park", "Bellandur", "Sarjapur Road",
];

pub fn faq_entries() -> Vec<FaqEntry> {
    FAQ_ENTRIES
        .iter()
        .map(|(question, answer, open)| FaqEntry {
            question: AttrValue::Static(*question),
            answer: AttrValue::Static(*answer),
            open: *open,
        })
        .collect()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_scroll_reveal();

    let stops: Vec<AttrValue> = MARQUEE_STOPS.iter().map(|stop| AttrValue::Static(*stop)).collect();

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-content">
                    <h1>{"Your office commute, "}<span class="accent">{"sorted."}</span></h1>
                    <p class="hero-subtitle">
                        {"AC buses on fixed routes, a guaranteed seat, and booking that lives in your WhatsApp."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#trial" class="btn btn-primary">{"Try it free"}</a>
                        <a href="#pricing" class="btn btn-ghost">{"See pricing"}</a>
                    </div>
                </div>
            </header>

            <section id="routes" class="routes">
                <Marquee items={stops} />
            </section>

            <section id="features" class="features">
                <div class="section-header">
                    <h2>{"Why ride with us"}</h2>
                    <p>{"Everything a daily commute should be, nothing it shouldn't."}</p>
                </div>
                <div class="features-grid">
                    <div class="feature-card">
                        <h3>{"Guaranteed seat"}</h3>
                        <p>{"Every booking is a reserved seat. No standing, no scramble."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Live tracking"}</h3>
                        <p>{"Get the bus location on WhatsApp so you leave home at the right minute."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Verified drivers"}</h3>
                        <p>{"Background-checked, trained drivers on every route."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Fixed fares"}</h3>
                        <p>{"No surge pricing. The fare you see is the fare you pay."}</p>
                    </div>
                </div>
            </section>

            <section id="pricing" class="pricing">
                <div class="section-header">
                    <h2>{"Simple pricing"}</h2>
                    <p>{"Pay per ride or save with a pass."}</p>
                </div>
                <div class="pricing-grid">
                    <div class="pricing-card">
                        <h3>{"Single ride"}</h3>
                        <p class="price">{"₹79"}<span>{" / ride"}</span></p>
                        <ul>
                            <li>{"Any route"}</li>
                            <li>{"Book up to 1 hour before"}</li>
                        </ul>
                    </div>
                    <div class="pricing-card featured">
                        <h3>{"Monthly pass"}</h3>
                        <p class="price">{"₹2,499"}<span>{" / month"}</span></p>
                        <ul>
                            <li>{"44 rides"}</li>
                            <li>{"Priority seat booking"}</li>
                            <li>{"Free reschedules"}</li>
                        </ul>
                    </div>
                    <div class="pricing-card">
                        <h3>{"Team plan"}</h3>
                        <p class="price">{"Custom"}</p>
                        <ul>
                            <li>{"Dedicated routes for your office"}</li>
                            <li>{"Monthly invoicing"}</li>
                        </ul>
                    </div>
                </div>
            </section>

            <section id="trial" class="trial">
                <div class="section-header">
                    <h2>{"Start your free week"}</h2>
                    <p>{"Drop your WhatsApp number and we'll set you up."}</p>
                </div>
                <TrialForm />
            </section>

            <section id="faq" class="faq">
                <div class="section-header">
                    <h2>{"Frequently asked questions"}</h2>
                </div>
                <FaqAccordion entries={faq_entries()} />
            </section>

            <section id="contact" class="contact">
                <div class="section-header">
                    <h2>{"Talk to us"}</h2>
                </div>
                <div class="contact-grid">
                    <div class="contact-item">
                        <h3>{"WhatsApp"}</h3>
                        <a href="https://wa.me/919000000000" target="_blank" rel="noopener noreferrer">{"+91 90000 00000"}</a>
                    </div>
                    <div class="contact-item">
                        <h3>{"Email"}</h3>
                        <a href="mailto:hello@allrides.in">{"hello@allrides.in"}</a>
                    </div>
                    <div class="contact-item">
                        <h3>{"Office"}</h3>
                        <p>{"Bengaluru, Karnataka"}</p>
                    </div>
                </div>
            </section>

            <Footer />

            <style>
                {r#"
                .landing-page {
                    color: #e5e7eb;
                    background: #0b1120;
                    padding-top: 72px;
                }

                .hero {
                    min-height: 80vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 4rem 1.5rem;
                }

                .hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                }

                .hero .accent {
                    color: #facc15;
                }

                .hero-subtitle {
                    font-size: 1.2rem;
                    color: #9ca3af;
                    max-width: 600px;
                    margin: 0 auto 2rem;
                }

                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                }

                .btn {
                    padding: 0.8rem 1.6rem;
                    border-radius: 999px;
                    font-weight: 600;
                    text-decoration: none;
                    border: none;
                    cursor: pointer;
                }

                .btn-primary {
                    background: #facc15;
                    color: #111827;
                }

                .btn-ghost {
                    border: 1px solid rgba(250, 204, 21, 0.5);
                    color: #facc15;
                }

                section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 2.5rem;
                }

                .section-header h2 {
                    font-size: 2.4rem;
                    margin-bottom: 0.5rem;
                }

                .section-header p {
                    color: #9ca3af;
                }

                .marquee-wrapper {
                    overflow: hidden;
                    white-space: nowrap;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    padding: 1rem 0;
                }

                .marquee-track {
                    display: inline-block;
                    animation: marquee 30s linear infinite;
                }

                .marquee-item {
                    margin: 0 2rem;
                    color: #9ca3af;
                    font-size: 1.1rem;
                }

                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }

                .features-grid,
                .pricing-grid,
                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }

                .feature-card,
                .pricing-card,
                .contact-item {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 16px;
                    padding: 1.5rem;
                }

                .pricing-card.featured {
                    border-color: #facc15;
                }

                .price {
                    font-size: 2rem;
                    font-weight: 700;
                    color: #facc15;
                }

                .price span {
                    font-size: 1rem;
                    color: #9ca3af;
                }

                .trial-form {
                    max-width: 560px;
                    margin: 0 auto;
                }

                .trial-input-row {
                    display: flex;
                    gap: 0.5rem;
                    align-items: center;
                }

                .trial-input-row input {
                    flex: 1;
                    padding: 0.8rem 1rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(255, 255, 255, 0.05);
                    color: #fff;
                }

                .form-note {
                    min-height: 1.5rem;
                    margin-top: 0.8rem;
                    text-align: center;
                }

                .visually-hidden {
                    position: absolute;
                    width: 1px;
                    height: 1px;
                    overflow: hidden;
                    clip: rect(0 0 0 0);
                }

                .faq-list {
                    max-width: 760px;
                    margin: 0 auto;
                }

                .faq-item {
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                }

                .faq-header {
                    width: 100%;
                    padding: 1.2rem 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .faq-icon {
                    color: #facc15;
                    font-size: 1.4rem;
                }

                .faq-content {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.35s linear;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-content {
                    max-height: 1000px;
                }

                .faq-content p {
                    color: #9ca3af;
                    line-height: 1.6;
                    padding-bottom: 1.2rem;
                }

                .site-footer {
                    text-align: center;
                    padding: 2rem 1rem;
                    color: #6b7280;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.4rem;
                    }

                    .trial-input-row {
                        flex-direction: column;
                        align-items: stretch;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accordion::GroupState;

    #[test]
    fn faq_starts_with_a_single_open_panel() {
        let group = GroupState::new(faq_entries().iter().map(|entry| entry.open));
        assert_eq!(group.len(), FAQ_ENTRIES.len());
        assert_eq!(group.open_index(), Some(0));
    }
}
