//! Web (Pages) Module
//!
//! - `guard` - route guard middleware over the session status
//! - `pages/` - settings, landing and auth pages
//! - `router` - page routes

pub mod guard;
pub mod pages;
pub mod router;

pub use guard::{GuardConfig, GuardDecision, route_guard};
pub use router::pages_router;
