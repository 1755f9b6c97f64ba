use crate::sections::{
    Features, FinalCta, Footer, Header, Hero, HowItWorks, Stats, TailoredFor, Testimonials,
};
use leptos::prelude::*;

/// The marketing welcome page: header, content sections in fixed vertical
/// order, footer. Sections are independent; each owns its own reveal latch.
#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <Header />
        <main>
            <Hero />
            <Features />
            <HowItWorks />
            <Stats />
            <TailoredFor />
            <Testimonials />
            <FinalCta />
        </main>
        <Footer />
    }
}
