use crate::components::icons::{Icon, ICON_CHECK_CIRCLE};
use crate::components::AnimatedSection;
use crate::data::AUDIENCES;
use crate::reveal::{stagger_delay_ms, CARD_THRESHOLD};
use leptos::prelude::*;

/// Two audience cards with check-marked highlights, one per side of the
/// platform. The cards trail the section header by two stagger steps.
#[component]
pub fn TailoredFor() -> impl IntoView {
    view! {
        <section class="section tailored-for">
            <div class="container">
                <AnimatedSection class="section-header">
                    <h2 class="section-title">"Tailored For Everyone"</h2>
                    <p class="section-description">
                        "Whether you're a patient seeking better access to care or a provider "
                        "aiming to streamline your practice, NovoPath has you covered."
                    </p>
                </AnimatedSection>
                <div class="audience-grid">
                    {AUDIENCES
                        .iter()
                        .enumerate()
                        .map(|(index, audience)| {
                            view! {
                                <AnimatedSection
                                    threshold=CARD_THRESHOLD
                                    delay_ms=stagger_delay_ms(index + 2)
                                    class="audience-card"
                                >
                                    <h3 class="audience-title">{audience.title}</h3>
                                    <ul class="audience-points">
                                        {audience
                                            .points
                                            .iter()
                                            .map(|point| {
                                                view! {
                                                    <li class="audience-point">
                                                        <Icon
                                                            path=ICON_CHECK_CIRCLE
                                                            size="22"
                                                            class="audience-check"
                                                        />
                                                        <p>
                                                            <span class="audience-point-heading">
                                                                {point.heading}": "
                                                            </span>
                                                            {point.detail}
                                                        </p>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </AnimatedSection>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use crate::data::AUDIENCES;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_card_per_audience() {
        assert_eq!(AUDIENCES.len(), 2);
        assert_eq!(AUDIENCES[0].title, "For Patients");
        assert_eq!(AUDIENCES[1].title, "For Providers");
    }

    #[test]
    fn every_card_lists_three_points() {
        for audience in &AUDIENCES {
            assert_eq!(audience.points.len(), 3, "{}", audience.title);
        }
    }
}
