use crate::components::icons::Icon;
use crate::components::AnimatedSection;
use crate::data::STATS;
use crate::reveal::{stagger_delay_ms, CARD_THRESHOLD};
use leptos::prelude::*;

/// Headline numbers in a band between the steps and the testimonials.
#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="section stats">
            <div class="container">
                <div class="stats-grid">
                    {STATS
                        .iter()
                        .enumerate()
                        .map(|(index, stat)| {
                            view! {
                                <AnimatedSection
                                    threshold=CARD_THRESHOLD
                                    delay_ms=stagger_delay_ms(index)
                                    class="stat"
                                >
                                    <div class="stat-icon">
                                        <Icon path=stat.icon size="24" />
                                    </div>
                                    <p class="stat-value">{stat.value}</p>
                                    <p class="stat-label">{stat.label}</p>
                                </AnimatedSection>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
