//! Testimonial cards with star ratings.

use crate::components::icons::{Icon, ICON_STAR};
use crate::components::AnimatedSection;
use crate::data::{Testimonial, TESTIMONIALS};
use crate::reveal::{stagger_delay_ms, CARD_THRESHOLD};
use leptos::prelude::*;

/// Left-to-right star fill for a 0-5 rating. Ratings above 5 clamp.
pub fn star_states(rating: u8) -> [bool; 5] {
    core::array::from_fn(|index| (index as u8) < rating.min(5))
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="section testimonials">
            <div class="container">
                <AnimatedSection class="section-header">
                    <h2 class="section-title">"Trusted by Patients and Providers"</h2>
                    <p class="section-description">
                        "See what our users are saying about NovoPath."
                    </p>
                </AnimatedSection>
                <div class="card-grid testimonial-grid">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(index, testimonial)| {
                            view! { <TestimonialCard testimonial=testimonial index=index /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial, index: usize) -> impl IntoView {
    view! {
        <AnimatedSection
            threshold=CARD_THRESHOLD
            delay_ms=stagger_delay_ms(index)
            class="testimonial-card"
        >
            <div
                class="testimonial-stars"
                aria-label=format!("{} out of 5 stars", testimonial.rating)
            >
                {star_states(testimonial.rating)
                    .into_iter()
                    .map(|filled| {
                        view! {
                            <Icon
                                path=ICON_STAR
                                size="18"
                                class=if filled { "star filled" } else { "star" }
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <p class="testimonial-feedback">{testimonial.feedback}</p>
            <div class="testimonial-author">
                <img
                    src=testimonial.avatar_url
                    alt=testimonial.name
                    class="testimonial-avatar"
                />
                <div>
                    <p class="testimonial-name">{testimonial.name}</p>
                    <p class="testimonial-role">{testimonial.role}</p>
                </div>
            </div>
        </AnimatedSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exactly_three_mock_records() {
        assert_eq!(TESTIMONIALS.len(), 3);
    }

    #[test]
    fn stars_fill_left_to_right() {
        assert_eq!(star_states(3), [true, true, true, false, false]);
    }

    #[test]
    fn zero_rating_fills_nothing() {
        assert_eq!(star_states(0), [false; 5]);
    }

    #[test]
    fn ratings_clamp_at_five() {
        assert_eq!(star_states(7), [true; 5]);
    }

    #[test]
    fn mock_ratings_stay_in_range() {
        for testimonial in &TESTIMONIALS {
            assert!(testimonial.rating <= 5, "{}", testimonial.name);
        }
    }

    #[test]
    fn star_count_matches_each_record() {
        for testimonial in &TESTIMONIALS {
            let filled = star_states(testimonial.rating)
                .iter()
                .filter(|f| **f)
                .count();
            assert_eq!(filled, testimonial.rating as usize);
        }
    }
}
