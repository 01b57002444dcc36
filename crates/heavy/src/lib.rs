//! # Heavy Component
//!
//! A leaf presentational component: a container with a fixed heading and a
//! fixed paragraph. It takes no props and holds no state.
//!
//! Deferring the mount (suspense, fallback, code splitting) is the host's job;
//! this crate only describes what appears once the host decides to render it.
//!
//! ## Example
//!
//! ```rust
//! use dioxus::prelude::*;
//! use lazy_heavy::HeavyComponent;
//!
//! fn Page() -> Element {
//!     rsx! { HeavyComponent {} }
//! }
//! ```

use dioxus::prelude::*;

/// Heading text shown once the component is mounted.
pub const HEADING: &str = "Heavy Component Loaded";

/// Paragraph text shown under the heading.
pub const DESCRIPTION: &str = "This component was loaded lazily using React Suspense.";

#[component]
pub fn HeavyComponent() -> Element {
    rsx! {
        div {
            h2 { "{HEADING}" }
            p { "{DESCRIPTION}" }
        }
    }
}
