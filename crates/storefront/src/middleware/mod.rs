//! Route access gates.
//!
//! Two gates mirror the original route map: protected routes require an
//! authenticated session and bounce everyone else to the login route, while
//! public-only routes (home, login) redirect already-authenticated users to
//! the dashboard.

pub mod auth;

pub use auth::{RedirectIfAuthenticated, RequireAuth};
