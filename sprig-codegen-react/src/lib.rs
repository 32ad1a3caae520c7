//! React component generator.
//!
//! The baseline component model: an exported function returning markup,
//! optionally with a props type, a stateful counter, a default export, and
//! an index-redirect folder layout. The Next.js and Remix generators build
//! on this composition.

mod component;

pub use component::{ReactComponent, ReactOptions};
