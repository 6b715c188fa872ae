//! wrm-ui - View components for the replay manager docs site
//!
//! Pure, props-based components. State lives in the page that mounts them.

pub mod components;

pub use components::*;
