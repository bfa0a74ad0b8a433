use yew::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::counter::StatCounter;
use crate::components::nav::AnchorLink;
use crate::components::reveal::{FadeIn, RevealImage};

struct Service {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        icon: "fas fa-pencil-ruler",
        title: "Brand Identity",
        blurb: "Logos, type and colour systems that hold up from business cards to billboards.",
    },
    Service {
        icon: "fas fa-laptop-code",
        title: "Web Design",
        blurb: "Fast, accessible sites designed around what your visitors came to do.",
    },
    Service {
        icon: "fas fa-mobile-alt",
        title: "Product Design",
        blurb: "Interfaces for apps and tools, from first wireframe to shipped screens.",
    },
];

const PORTFOLIO: &[(&str, &str, &str)] = &[
    ("/assets/portfolio-1.jpg", "Harbor Coffee", "Brand identity"),
    ("/assets/portfolio-2.jpg", "Fieldnotes", "Web design"),
    ("/assets/portfolio-3.jpg", "Tally", "Product design"),
    ("/assets/portfolio-4.jpg", "Oak & Iron", "Packaging"),
];

const STATS: &[(u32, &str)] = &[
    (150, "Projects delivered"),
    (80, "Happy clients"),
    (12, "Design awards"),
    (8, "Years in business"),
];

const CONTACT_ITEMS: &[(&str, &str)] = &[
    ("fas fa-envelope", "hello@northlight.studio"),
    ("fas fa-phone", "+1 (555) 014-2286"),
    ("fas fa-map-marker-alt", "214 Mercer Street, Portland"),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main>
            <style>
            {r#"
                .fade-in {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .fade-in.fade-in-up {
                    opacity: 1;
                    transform: translateY(0);
                }
                .navbar {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 999;
                    transition: border-color 0.3s ease;
                }
                .nav-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    height: 70px;
                    padding: 0 20px;
                }
                .nav-menu {
                    display: flex;
                    list-style: none;
                    gap: 2rem;
                }
                .hamburger {
                    display: none;
                    cursor: pointer;
                }
                .hamburger .bar {
                    display: block;
                    width: 25px;
                    height: 2px;
                    margin: 5px auto;
                    background: #333;
                    transition: all 0.3s ease;
                }
                @media (max-width: 768px) {
                    .hamburger { display: block; }
                    .hamburger.active .bar:nth-child(2) { opacity: 0; }
                    .hamburger.active .bar:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                    .hamburger.active .bar:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                    .nav-menu {
                        position: fixed;
                        left: -100%;
                        top: 70px;
                        flex-direction: column;
                        background: white;
                        width: 100%;
                        text-align: center;
                        transition: left 0.3s ease;
                    }
                    .nav-menu.active { left: 0; }
                }
                .notification-content {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .notification-close {
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.2rem;
                    cursor: pointer;
                }
            "#}
            </style>

            <section id="home" class="hero">
                <div class="hero-content">
                    <h1>{"Design that earns attention"}</h1>
                    <p>{"We are a small studio building brands, websites and products with care."}</p>
                    <div class="hero-buttons">
                        <AnchorLink href="#portfolio" class="btn btn-primary">{"See our work"}</AnchorLink>
                        <AnchorLink href="#contact" class="btn btn-secondary">{"Start a project"}</AnchorLink>
                    </div>
                </div>
            </section>

            <section id="services" class="services">
                <h2 class="section-title">{"Services"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <FadeIn class="service-card">
                            <i class={service.icon}></i>
                            <h3>{ service.title }</h3>
                            <p>{ service.blurb }</p>
                        </FadeIn>
                    }) }
                </div>
            </section>

            <section id="portfolio" class="portfolio">
                <h2 class="section-title">{"Selected work"}</h2>
                <div class="portfolio-grid">
                    { for PORTFOLIO.iter().map(|(src, title, category)| html! {
                        <FadeIn class="portfolio-item">
                            <div class="portfolio-image">
                                <RevealImage src={*src} alt={*title} />
                            </div>
                            <div class="portfolio-info">
                                <h3>{ *title }</h3>
                                <p>{ *category }</p>
                            </div>
                        </FadeIn>
                    }) }
                </div>
            </section>

            <section id="about" class="about">
                <h2 class="section-title">{"About us"}</h2>
                <p class="about-text">
                    {"Northlight is a team of designers and developers who like shipping work that lasts."}
                </p>
                <div class="stats">
                    { for STATS.iter().map(|(value, label)| html! {
                        <StatCounter value={*value} label={*label} />
                    }) }
                </div>
            </section>

            <section id="contact" class="contact">
                <h2 class="section-title">{"Get in touch"}</h2>
                <div class="contact-content">
                    <div class="contact-info">
                        { for CONTACT_ITEMS.iter().map(|(icon, text)| html! {
                            <FadeIn class="contact-item">
                                <i class={*icon}></i>
                                <span>{ *text }</span>
                            </FadeIn>
                        }) }
                    </div>
                    <ContactForm />
                </div>
            </section>

            <footer class="footer">
                <p>{"\u{00a9} 2026 Northlight Studio. All rights reserved."}</p>
            </footer>
        </main>
    }
}
