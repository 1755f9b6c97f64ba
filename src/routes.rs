//! Navigation targets consumed by the platform router.
//!
//! The landing page only declares link targets; route matching, guards and
//! redirects live in the host application.

/// Landing page itself.
pub const HOME: &str = "/";
/// Sign-in flow.
pub const LOGIN: &str = "/login";
/// Registration entry point (role selection).
pub const REGISTER: &str = "/register";
/// Patient registration flow.
pub const REGISTER_PATIENT: &str = "/register/patient";
/// Provider registration flow.
pub const REGISTER_PROVIDER: &str = "/register/provider";
/// Dashboard for signed-in users.
pub const DASHBOARD: &str = "/dashboard";
