//! UI components: dock bar, overlay menu, host page.

pub mod component;
pub mod dock;
pub mod overlay;
pub mod page;

pub use component::*;
pub use dock::DockComponent;
pub use overlay::OverlayComponent;
pub use page::PageComponent;
