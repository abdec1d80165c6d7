pub mod action_button;
pub mod loading_screen;
pub mod nav_bar;
pub mod panel;
pub mod user_badge;

pub use action_button::*;
pub use loading_screen::*;
pub use nav_bar::*;
pub use panel::*;
pub use user_badge::*;
