use crate::components::icons::Icon;
use crate::components::AnimatedSection;
use crate::data::FEATURES;
use crate::reveal::{stagger_delay_ms, CARD_THRESHOLD};
use leptos::prelude::*;

/// Feature grid: four cards, each revealing with a 100ms cascade.
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="section features">
            <div class="container">
                <AnimatedSection class="section-header">
                    <h2 class="section-title">"A Better Path to Wellness"</h2>
                    <p class="section-description">
                        "Explore the tools that empower your health journey."
                    </p>
                </AnimatedSection>
                <div class="card-grid">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| {
                            view! {
                                <AnimatedSection
                                    threshold=CARD_THRESHOLD
                                    delay_ms=stagger_delay_ms(index)
                                    class="feature-card"
                                >
                                    <div class="feature-icon">
                                        <Icon path=feature.icon size="28" />
                                    </div>
                                    <h3 class="feature-title">{feature.title}</h3>
                                    <p class="feature-description">{feature.description}</p>
                                </AnimatedSection>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
