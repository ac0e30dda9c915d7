//! Landing page
//!
//! Every section below the hero starts hidden behind an entrance animation
//! class and is revealed as it scrolls into view.

use leptos::prelude::*;

use crate::core::animation::{AnimationKind, StaggerGroup};
use crate::ui::carousel::{Testimonial, TestimonialCarousel};
use crate::ui::counter::AnimatedCounter;
use crate::ui::forms::{ContactForm, NewsletterForm, SimulatedForm};
use crate::ui::nav::{SectionLink, SiteHeader};
use crate::ui::pricing::PricingSection;
use crate::ui::reveal::{LazyImage, use_entrance_animations, use_lazy_images};

/// Offered services as (icon, title, description)
const SERVICES: [(&str, &str, &str); 6] = [
    ("🔍", "SEO Optimization", "Climb the rankings with technical audits, content and link building."),
    ("📱", "Social Media Marketing", "Grow engaged audiences across every platform your customers use."),
    ("🎯", "Google Ads", "Pay for clicks that convert with tightly managed search campaigns."),
    ("✍", "Content Marketing", "Articles, guides and videos that answer what your buyers ask."),
    ("✉", "Email Automation", "Nurture leads with sequences that send themselves."),
    ("📊", "Analytics & Reporting", "Dashboards that tie every campaign back to revenue."),
];

/// Headline statistics as (value, label)
const STATS: [(&str, &str); 4] = [
    ("156+", "Happy Clients"),
    ("320%", "Average ROI"),
    ("12M+", "Impressions Delivered"),
    ("98%", "Client Retention"),
];

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "Our organic traffic tripled in six months. The reporting alone is worth it.",
            author: "Sarah Mitchell",
            role: "CEO, Brightline Goods",
        },
        Testimonial {
            quote: "They took our ad spend from a cost centre to our best-performing channel.",
            author: "David Chen",
            role: "Marketing Director, Nimbus Labs",
        },
        Testimonial {
            quote: "Clear communication, honest numbers and a team that genuinely cares.",
            author: "Laura Gómez",
            role: "Founder, Casa Verde",
        },
    ]
}

#[component]
pub fn HomePage() -> impl IntoView {
    use_entrance_animations();
    use_lazy_images();

    view! {
        <SiteHeader />
        <main>
            <Hero />
            <Services />
            <Stats />
            <section id="testimonials" class="testimonials section">
                <div class="container">
                    <div class="section-header fade-in">
                        <h2>"What Our Clients Say"</h2>
                    </div>
                    <TestimonialCarousel testimonials=testimonials() />
                </div>
            </section>
            <PricingSection />
            <Contact />
        </main>
        <Footer />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="container hero-content">
                <div class=format!("hero-text {}", AnimationKind::FadeIn.class()) style="opacity: 1; transform: none;">
                    <h1>"Marketing that moves the needle"</h1>
                    <p>
                        "Data-driven SEO, social and paid campaigns for businesses that want "
                        "growth they can measure."
                    </p>
                    <div class="hero-actions">
                        <SectionLink target="contact">
                            <span class="btn btn-primary">"Get a Free Audit"</span>
                        </SectionLink>
                        <SectionLink target="services">
                            <span class="btn btn-outline">"Our Services"</span>
                        </SectionLink>
                    </div>
                </div>
                <div class=format!("hero-image {}", AnimationKind::SlideInRight.class()) style="opacity: 1;">
                    <LazyImage src="/images/hero-dashboard.svg" alt="Campaign analytics dashboard" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Services() -> impl IntoView {
    let group = StaggerGroup::ServiceCard;

    view! {
        <section id="services" class="services section">
            <div class="container">
                <div class="section-header fade-in">
                    <h2>"Our Services"</h2>
                    <p>"Everything you need to be found, chosen and remembered."</p>
                </div>
                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(index, (icon, title, description))| {
                            view! {
                                <div
                                    class=format!("service-card {}", group.kind().class())
                                    style=group.delay_style(index)
                                >
                                    <div class="service-icon">{*icon}</div>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stats() -> impl IntoView {
    view! {
        <section class="stats section">
            <div class="container stats-grid">
                {STATS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="stat-item fade-in">
                                <AnimatedCounter text=*value />
                                <span class="stat-label">{*label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact section">
            <div class="container contact-grid">
                <div class="contact-info slide-in-left">
                    <h2>"Let's Grow Together"</h2>
                    <p>"Tell us about your goals and we'll reply within one business day."</p>
                    <SimulatedForm id="auditForm" submit_label="Request Audit">
                        <div class="form-group">
                            <label for="audit-website">"Website"</label>
                            <input type="url" id="audit-website" name="website" placeholder="https://" />
                        </div>
                    </SimulatedForm>
                </div>
                <div class="contact-form-wrapper fade-in">
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <span class="logo-text">"Pulsemark"</span>
                    <p>"Digital marketing for ambitious small businesses."</p>
                </div>
                <div class="footer-newsletter">
                    <h4>"Newsletter"</h4>
                    <p>"Monthly tips on search, social and ads."</p>
                    <NewsletterForm />
                </div>
            </div>
            <div class="container footer-bottom">
                <p>"© 2025 Pulsemark. All rights reserved."</p>
            </div>
        </footer>
    }
}
