//! Static sections of the marketing home page.

use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "🧪",
        title: "Hands-on Labs",
        description: "Attack and defend real services in isolated containers, straight from your browser.",
    },
    Feature {
        icon: "🗺️",
        title: "Guided Tracks",
        description: "Modules build on each other, from web basics to exploit development.",
    },
    Feature {
        icon: "🏆",
        title: "Earn as You Learn",
        description: "Every completed lab awards points toward badges you can show off.",
    },
];

const STATS: [(&str, &str); 4] = [
    ("50+", "Hands-on labs"),
    ("12", "Learning modules"),
    ("10k+", "Active learners"),
    ("24/7", "Lab availability"),
];

#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section { class: "hero",
            h1 { class: "hero-title",
                "Learn cybersecurity by "
                span { class: "accent", "breaking things" }
            }
            p { class: "hero-subtitle",
                "Practical labs, structured modules and instant feedback. "
                "Build the skills defenders and pentesters actually use."
            }
            div { class: "hero-actions",
                Link { class: "btn btn-primary", to: Route::Dashboard {}, "Get started" }
                a { class: "btn btn-ghost", href: "#features", "Learn more" }
            }
        }
    }
}

#[component]
pub fn ContentSection() -> Element {
    rsx! {
        section { class: "content-section", id: "features",
            h2 { class: "section-title", "Why CyberLab" }
            div { class: "feature-grid",
                for feature in FEATURES.iter() {
                    FeatureCard {
                        icon: feature.icon,
                        title: feature.title,
                        description: feature.description,
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> Element {
    rsx! {
        article { class: "feature-card",
            div { class: "feature-icon", "{icon}" }
            h3 { "{title}" }
            p { "{description}" }
        }
    }
}

#[component]
pub fn StatsSection() -> Element {
    rsx! {
        section { class: "stats-section",
            for (value, label) in STATS {
                div { class: "stat",
                    span { class: "stat-value", "{value}" }
                    span { class: "stat-label", "{label}" }
                }
            }
        }
    }
}

#[component]
pub fn CtaSection() -> Element {
    rsx! {
        section { class: "cta-section",
            h2 { "Ready to start your first lab?" }
            p { "Create a free account and launch a vulnerable target in under a minute." }
            Link { class: "btn btn-primary", to: Route::Dashboard {}, "Start learning" }
        }
    }
}
