use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

/// State for the full-screen overlay menu shown on narrow viewports.
///
/// The open/closed flag lives on the dock; this only tracks what the overlay
/// drew last and which entry the pointer or focus is on.
#[derive(Debug, Clone)]
pub struct OverlayState {
    pub container_focus: FocusFlag,
    /// One flag per item, keyed by item index.
    pub entry_focus_flags: Vec<FocusFlag>,
    pub hovered: Option<usize>,
    /// Bounding box of the link list of the last frame.
    pub nav_area: Rect,
    pub entry_areas: Vec<(usize, Rect)>,
}

impl OverlayState {
    pub fn new(item_count: usize) -> Self {
        Self {
            container_focus: FocusFlag::named("overlay"),
            entry_focus_flags: (0..item_count).map(|index| FocusFlag::named(&format!("overlay.entry.{index}"))).collect(),
            hovered: None,
            nav_area: Rect::default(),
            entry_areas: Vec::new(),
        }
    }

    pub fn focused_entry(&self) -> Option<usize> {
        self.entry_focus_flags.iter().position(|flag| flag.get())
    }

    /// Drops everything recorded from the last frame.
    pub fn reset(&mut self) {
        self.hovered = None;
        self.nav_area = Rect::default();
        self.entry_areas.clear();
    }
}

impl HasFocus for OverlayState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for (index, _) in &self.entry_areas {
            if let Some(flag) = self.entry_focus_flags.get(*index) {
                builder.leaf_widget(flag);
            }
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.nav_area
    }
}
