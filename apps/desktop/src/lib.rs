//! Host application for the heavy component.
//!
//! The heavy component itself is static; everything about deferring it lives
//! here: a [`SuspenseBoundary`] shows [`LoadingFallback`] while
//! [`DeferredHeavy`] waits on a resource, then swaps in the real markup.

#[cfg(feature = "desktop")]
mod desktop;
mod logging;

#[cfg(feature = "desktop")]
pub use crate::desktop::DesktopApp;
pub use crate::logging::init_logging;

use dioxus::prelude::*;
use lazy_heavy::HeavyComponent;
use lazy_settings::AppConfig;
use std::time::Duration;
use tracing::debug;

/// Root component. Expects an [`AppConfig`] in the root context.
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let title = config.window.title.clone();
    let fallback_text = config.loader.fallback_text.clone();
    let delay_ms = config.loader.delay_ms;

    rsx! {
        main {
            h1 { "{title}" }
            SuspenseBoundary {
                fallback: move |_: SuspenseContext| rsx! {
                    LoadingFallback { text: fallback_text.clone() }
                },
                DeferredHeavy { delay_ms }
            }
        }
    }
}

/// Placeholder shown while the heavy component is pending.
#[component]
pub fn LoadingFallback(text: String) -> Element {
    rsx! {
        div { class: "fallback", "{text}" }
    }
}

/// Suspends for `delay_ms`, then mounts [`HeavyComponent`].
#[component]
pub fn DeferredHeavy(delay_ms: u64) -> Element {
    let resource = use_resource(move || async move {
        debug!(delay_ms, "Deferring heavy component");
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    });

    resource.suspend()?;
    debug!("Heavy component ready");

    rsx! {
        HeavyComponent {}
    }
}
