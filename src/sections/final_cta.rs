use crate::auth::use_current_user;
use crate::components::AnimatedSection;
use crate::routes;
use leptos::prelude::*;

/// Closing call-to-action band. Mirrors the hero's auth branch: signed-in
/// users are sent to the dashboard instead of registration.
#[component]
pub fn FinalCta() -> impl IntoView {
    let user = use_current_user();
    let (target, label) = match user {
        Some(_) => (routes::DASHBOARD, "Go to Your Dashboard"),
        None => (routes::REGISTER, "Create Your Free Account"),
    };

    view! {
        <section class="section final-cta">
            <div class="final-cta-orb orb-left"></div>
            <div class="final-cta-orb orb-right"></div>
            <div class="container">
                <AnimatedSection class="final-cta-inner">
                    <h2 class="section-title">"Ready to Take Control of Your Health?"</h2>
                    <p class="final-cta-description">
                        "Join thousands of others on a smarter path to healthcare. "
                        "Creating an account is free and takes just a minute."
                    </p>
                    <div class="final-cta-actions">
                        <a href=target class="btn btn-light">{label}</a>
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}
