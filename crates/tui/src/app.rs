//! Application state for the MenuDock TUI.
//!
//! `App` owns the dock, the overlay menu and the host page, plus the pieces of
//! context every component needs (theme, viewport, focus, frame clock).
//! Components mutate it through their event handlers; the runtime feeds it
//! messages and executes the effects they return.

use std::rc::Rc;
use std::time::{Duration, Instant};

use menudock_types::{DockTrigger, Effect, Msg, Presentation, Viewport};
use menudock_util::DockConfig;
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::ui::components::dock::{DockSizing, DockState};
use crate::ui::components::overlay::OverlayState;
use crate::ui::components::page::{PageState, showcase_menu_items};
use crate::ui::theme::{LoadedTheme, Theme};

/// Cross-cutting context shared by all components.
#[derive(Debug)]
pub struct SharedCtx {
    pub theme: Box<dyn Theme>,
    /// Identifier of the active theme, for logging and the hint bar.
    pub theme_id: &'static str,
}

impl SharedCtx {
    pub fn new(loaded: LoadedTheme) -> Self {
        Self {
            theme_id: loaded.definition.id,
            theme: loaded.theme,
        }
    }
}

pub struct App {
    pub ctx: SharedCtx,
    /// Viewports narrower than this use the overlay menu.
    pub breakpoint: u16,
    pub dock: DockState,
    pub overlay: OverlayState,
    pub page: PageState,
    pub viewport: Viewport,
    pub focus: Rc<Focus>,
    /// Clock for the current dispatch/render pass; transitions and sampling
    /// both read it.
    pub frame_time: Instant,
}

impl App {
    pub fn new(config: &DockConfig, theme: LoadedTheme, viewport: Viewport, now: Instant) -> Self {
        let items = config.items.clone().unwrap_or_else(showcase_menu_items);
        let sizing = DockSizing {
            expanded_percent: config.expanded_percent,
            max_width: config.max_width,
        };
        let transition = Duration::from_millis(u64::from(config.transition_ms));
        let overlay = OverlayState::new(items.len());
        let dock = DockState::new(Some(items), config.brand.clone(), sizing, transition, now);

        let mut app = Self {
            ctx: SharedCtx::new(theme),
            breakpoint: config.breakpoint,
            dock,
            overlay,
            page: PageState::new(config.title.clone(), now),
            viewport,
            focus: Rc::default(),
            frame_time: now,
        };
        app.focus = Rc::new(FocusBuilder::build_for(&app));
        debug!(theme = app.ctx.theme_id, items = app.dock.items.len(), "app initialized");
        app
    }

    /// Applies a runtime message to the application state.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {}
            Msg::Resize(width, height) => {
                let before = self.presentation();
                self.viewport = Viewport::new(*width, *height);
                let after = self.presentation();
                if before != after {
                    info!(?before, ?after, width, "presentation changed");
                    if after == Presentation::Desktop {
                        self.overlay.reset();
                    }
                }
            }
        }
        Vec::new()
    }

    pub fn presentation(&self) -> Presentation {
        self.viewport.presentation(self.breakpoint)
    }

    /// Whether the overlay menu is part of the current frame.
    pub fn overlay_visible(&self) -> bool {
        self.dock.is_open() && self.presentation() == Presentation::Mobile
    }

    /// Whether anything on screen is still tweening at `frame_time`.
    pub fn is_animating(&self) -> bool {
        self.dock.is_animating(self.frame_time) || self.page.is_animating(self.frame_time)
    }

    /// Routes a trigger into the dock's state machine at the current frame time.
    pub fn dispatch(&mut self, trigger: DockTrigger) -> bool {
        let changed = self.dock.apply(trigger, self.frame_time);
        if changed && !self.dock.is_open() {
            self.overlay.reset();
        }
        changed
    }

    /// Selecting a link closes the menu and navigates to its href.
    pub fn select_link(&mut self, index: usize) -> Vec<Effect> {
        let Some(item) = self.dock.items.get(index) else {
            return Vec::new();
        };
        let href = item.href.clone();
        self.dispatch(DockTrigger::LinkSelected);
        vec![Effect::Navigate(href)]
    }

    pub fn navigate(&mut self, href: &str) {
        info!(href, "navigate");
        self.page.navigate(href);
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.widget(&self.dock);
        if self.overlay_visible() {
            builder.widget(&self.overlay);
        }
    }

    fn focus(&self) -> FocusFlag {
        self.dock.focus()
    }

    fn area(&self) -> Rect {
        Rect::new(0, 0, self.viewport.width, self.viewport.height)
    }
}
