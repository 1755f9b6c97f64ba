//! Welcome page sections, top to bottom.

mod features;
mod final_cta;
mod footer;
mod header;
mod hero;
mod how_it_works;
mod stats;
mod tailored_for;
mod testimonials;

pub use features::Features;
pub use final_cta::FinalCta;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use stats::Stats;
pub use tailored_for::TailoredFor;
pub use testimonials::Testimonials;
