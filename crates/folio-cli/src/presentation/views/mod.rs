mod backdrop;
mod menu;
mod navbar;
mod statusbar;

pub use backdrop::BackdropView;
pub use menu::MenuOverlayView;
pub use navbar::NavBarView;
pub use statusbar::StatusBarView;
