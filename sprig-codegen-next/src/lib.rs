//! Next.js component and page generators.
//!
//! Components extend the baseline React composition with an optional client
//! directive. Pages are folder-scoped route artifacts with a fixed
//! `page.tsx` file name, route-parameter props, and a metadata export.

mod component;
mod page;

pub use component::{NextComponent, NextOptions};
pub use page::{NextPage, PageOptions};
