//! Reusable presentation components.

mod animated;
pub mod icons;
mod spinner;

pub use animated::AnimatedSection;
pub use spinner::LoadingIndicator;
