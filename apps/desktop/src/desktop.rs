use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use lazy_settings::{AppConfig, WindowConfig};

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self::from_config(&WindowConfig::default())
    }
}

impl DesktopApp {
    #[must_use]
    pub fn from_config(window: &WindowConfig) -> Self {
        Self { title: window.title.clone(), width: window.width, height: window.height }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Opens the window and blocks until it is closed. `config` is exposed to
    /// components through `use_context::<AppConfig>()`.
    pub fn launch(self, root: fn() -> Element, config: AppConfig) {
        tracing::info!(title = %self.title, width = self.width, height = self.height, "Launching desktop window");

        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize { width: self.width, height: self.height });

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(config.clone()))
            .launch(root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_follows_window_config() {
        let app = DesktopApp::default().with_title("Custom").with_size(640.0, 480.0);

        assert_eq!(app.title, "Custom");
        assert!((app.width - 640.0).abs() < f64::EPSILON);
        assert!((app.height - 480.0).abs() < f64::EPSILON);
    }
}
