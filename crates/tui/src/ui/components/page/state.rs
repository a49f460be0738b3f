use std::time::Instant;

use menudock_types::MenuItem;

use crate::ui::animation::FadeIn;

/// Items the host page hands to the dock when the configuration names none.
pub fn showcase_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new("#about", "About"),
        MenuItem::new("#work", "Work"),
        MenuItem::new("#services", "Services"),
        MenuItem::new("#contact", "Contact"),
    ]
}

/// State of the host page behind the dock.
#[derive(Debug)]
pub struct PageState {
    pub title: String,
    title_fade: FadeIn,
    /// Last navigated `href`; starts at the root.
    pub location: String,
}

impl PageState {
    pub fn new(title: impl Into<String>, now: Instant) -> Self {
        Self {
            title: title.into(),
            title_fade: FadeIn::start(now),
            location: "/".to_string(),
        }
    }

    pub fn title_opacity(&self, now: Instant) -> f32 {
        self.title_fade.opacity(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.title_fade.in_progress(now)
    }

    /// Records a navigation. The href is used verbatim.
    pub fn navigate(&mut self, href: &str) {
        self.location = href.to_string();
    }
}
