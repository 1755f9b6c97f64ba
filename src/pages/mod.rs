//! Page-level compositions.

mod welcome;

pub use welcome::WelcomePage;
