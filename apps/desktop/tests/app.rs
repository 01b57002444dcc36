use dioxus::prelude::*;
use lazy_desktop::{App, LoadingFallback};
use lazy_heavy::{DESCRIPTION, HEADING};
use lazy_settings::AppConfig;

fn config_with_delay(delay_ms: u64) -> AppConfig {
    let mut config = AppConfig::default();
    config.loader.delay_ms = delay_ms;
    config.window.title = "Host Page".to_owned();
    config
}

#[test]
fn fallback_renders_configured_text() {
    let html = dioxus_ssr::render_element(rsx! {
        LoadingFallback { text: "Please wait".to_owned() }
    });

    assert_eq!(html, r#"<div class="fallback">Please wait</div>"#);
}

#[tokio::test]
async fn heavy_component_mounts_once_suspense_resolves() {
    let mut dom = VirtualDom::new(App).with_root_context(config_with_delay(0));
    dom.rebuild_in_place();
    dom.wait_for_suspense().await;

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("<h1>Host Page</h1>"), "missing page title in {html}");
    assert!(html.contains(HEADING), "heading missing after resolve: {html}");
    assert!(html.contains(DESCRIPTION), "description missing after resolve: {html}");
    assert!(!html.contains("Loading..."), "fallback should be gone: {html}");
}

#[tokio::test]
async fn fallback_is_shown_while_heavy_component_is_deferred() {
    let mut dom = VirtualDom::new(App).with_root_context(config_with_delay(60_000));
    dom.rebuild_in_place();

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("<h1>Host Page</h1>"), "missing page title in {html}");
    assert!(
        html.contains(r#"<div class="fallback">Loading...</div>"#),
        "fallback missing while deferred: {html}"
    );
    assert!(!html.contains(HEADING), "heavy component should not be mounted yet: {html}");
}
