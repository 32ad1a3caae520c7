//! Remix component and route generators.
//!
//! Components extend the baseline React composition with an optional data
//! loader. Routes are meta-exporting artifacts with the fixed `route.tsx`
//! file name, optionally folder-scoped.

mod component;
mod route;

pub use component::{RemixComponent, RemixOptions};
pub use route::{RemixRoute, RouteOptions};
