use crate::components::AnimatedSection;
use crate::data::HOW_IT_WORKS;
use crate::reveal::{stagger_delay_ms, CARD_THRESHOLD};
use leptos::prelude::*;

/// Three numbered onboarding steps on a decorative connecting line.
#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="section how-it-works">
            <div class="container">
                <AnimatedSection class="section-header">
                    <h2 class="section-title">"Getting Started is Easy"</h2>
                    <p class="section-description">
                        "A simple, straightforward path to managing your health."
                    </p>
                </AnimatedSection>
                <div class="steps">
                    <div class="steps-line"></div>
                    <div class="steps-grid">
                        {HOW_IT_WORKS
                            .iter()
                            .enumerate()
                            .map(|(index, step)| {
                                view! {
                                    <AnimatedSection
                                        threshold=CARD_THRESHOLD
                                        delay_ms=stagger_delay_ms(index)
                                        class="step"
                                    >
                                        <div class="step-badge">{step.number}</div>
                                        <h3 class="step-title">{step.title}</h3>
                                        <p class="step-description">{step.description}</p>
                                    </AnimatedSection>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
