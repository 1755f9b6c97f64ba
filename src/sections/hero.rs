//! Hero section: the only place in the page with branching logic.
//!
//! Both the headline and the call-to-action targets are pure functions of
//! the (optional) current user, so they are testable without rendering.

use crate::auth::{use_current_user, CurrentUser};
use crate::components::icons::{Icon, ICON_ARROW_RIGHT};
use crate::routes;
use leptos::prelude::*;

/// Headline shown to signed-out visitors.
pub const GENERIC_HEADLINE: &str = "Intelligent Healthcare, Reimagined for You";

/// Hero headline: personalized when a user is signed in.
pub fn greeting(user: Option<&CurrentUser>) -> String {
    match user {
        Some(user) => format!("Welcome back, {}!", user.name),
        None => GENERIC_HEADLINE.to_string(),
    }
}

/// Targets for the two hero call-to-action buttons.
#[derive(Debug, PartialEq, Eq)]
pub struct CtaTargets {
    pub primary: &'static str,
    pub secondary: &'static str,
}

/// Signed-out visitors are steered to the role-specific registration
/// flows; signed-in users go straight to their dashboard from either
/// button.
pub fn cta_targets(user: Option<&CurrentUser>) -> CtaTargets {
    match user {
        Some(_) => CtaTargets {
            primary: routes::DASHBOARD,
            secondary: routes::DASHBOARD,
        },
        None => CtaTargets {
            primary: routes::REGISTER_PATIENT,
            secondary: routes::REGISTER_PROVIDER,
        },
    }
}

fn cta_labels(user: Option<&CurrentUser>) -> (&'static str, &'static str) {
    match user {
        Some(_) => ("Go to Dashboard", "View My Care Plan"),
        None => ("I'm a Patient", "I'm a Provider"),
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let user = use_current_user();
    let headline = greeting(user.as_ref());
    let targets = cta_targets(user.as_ref());
    let (primary_label, secondary_label) = cta_labels(user.as_ref());

    view! {
        <section class="hero">
            <div class="container hero-grid">
                <div class="hero-content">
                    <h1 class="hero-title rise">{headline}</h1>
                    <p class="hero-description rise rise-1">
                        "NovoPath is a comprehensive healthcare platform connecting patients "
                        "and providers for seamless, intelligent, and personalized medical care."
                    </p>
                    <div class="hero-actions rise rise-2">
                        <a href=targets.primary class="btn btn-primary">
                            {primary_label}
                            <Icon path=ICON_ARROW_RIGHT size="18" class="btn-icon" />
                        </a>
                        <a href=targets.secondary class="btn btn-secondary">
                            {secondary_label}
                        </a>
                    </div>
                </div>
                <HeroAnimation />
            </div>
        </section>
    }
}

/// Decorative network-of-care graphic beside the hero copy. Animated
/// entirely in CSS with fixed per-element delays.
#[component]
fn HeroAnimation() -> impl IntoView {
    view! {
        <div class="hero-visual" aria-hidden="true">
            <svg viewBox="0 0 400 400" class="hero-network">
                <defs>
                    <linearGradient id="hero-line-gradient" x1="0%" y1="0%" x2="100%" y2="100%">
                        <stop offset="0%" stop-color="#60a5fa" />
                        <stop offset="100%" stop-color="#14b8a6" />
                    </linearGradient>
                </defs>
                <path d="M50 50 L 150 150 L 250 50" class="hero-line" style="animation-delay: 0s" />
                <path d="M50 350 L 150 250 L 50 150" class="hero-line" style="animation-delay: 1s" />
                <path d="M350 50 L 250 150 L 350 250" class="hero-line" style="animation-delay: 2s" />
                <path d="M150 150 L 250 250 L 150 350" class="hero-line" style="animation-delay: 3s" />

                <circle cx="50" cy="50" r="8" fill="#3b82f6" class="hero-node" style="animation-delay: 0.2s" />
                <circle cx="250" cy="50" r="6" fill="#14b8a6" class="hero-node" style="animation-delay: 0.4s" />
                <circle cx="350" cy="50" r="7" fill="#3b82f6" class="hero-node" style="animation-delay: 0.6s" />
                <circle cx="50" cy="150" r="5" fill="#14b8a6" class="hero-node" style="animation-delay: 0.8s" />
                <circle cx="150" cy="150" r="10" fill="#3b82f6" class="hero-node" style="animation-delay: 1s" />
                <circle cx="250" cy="150" r="6" fill="#14b8a6" class="hero-node" style="animation-delay: 1.2s" />
                <circle cx="150" cy="250" r="8" fill="#14b8a6" class="hero-node" style="animation-delay: 1.4s" />
                <circle cx="250" cy="250" r="5" fill="#3b82f6" class="hero-node" style="animation-delay: 1.6s" />
                <circle cx="50" cy="350" r="6" fill="#3b82f6" class="hero-node" style="animation-delay: 2s" />
                <circle cx="150" cy="350" r="8" fill="#14b8a6" class="hero-node" style="animation-delay: 2.2s" />
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn signed_out_gets_generic_headline() {
        assert_eq!(greeting(None), GENERIC_HEADLINE);
    }

    #[test]
    fn signed_in_gets_personal_greeting() {
        let user = CurrentUser { name: "Ava".into() };
        assert_eq!(greeting(Some(&user)), "Welcome back, Ava!");
    }

    #[test]
    fn signed_out_ctas_point_at_registration() {
        let targets = cta_targets(None);
        assert_eq!(targets.primary, routes::REGISTER_PATIENT);
        assert_eq!(targets.secondary, routes::REGISTER_PROVIDER);
    }

    #[test]
    fn signed_in_ctas_point_at_dashboard() {
        let user = CurrentUser { name: "Ava".into() };
        let targets = cta_targets(Some(&user));
        assert_eq!(targets.primary, routes::DASHBOARD);
        assert_eq!(targets.secondary, routes::DASHBOARD);
    }
}
