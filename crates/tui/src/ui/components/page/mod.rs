//! Host page drawn behind the dock: gradient background, fading title,
//! current location and the hint bar.

mod page_component;
mod state;

pub use page_component::PageComponent;
pub use state::{PageState, showcase_menu_items};
