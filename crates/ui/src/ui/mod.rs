pub mod add_song_form;
pub mod button;
pub mod filter_bar;
pub mod layout;
pub mod library_view;
pub mod list_view;
pub mod login_view;
pub mod text_field;
pub mod theme;

pub use add_song_form::*;
pub use button::*;
pub use filter_bar::*;
pub use layout::*;
pub use library_view::*;
pub use list_view::*;
pub use login_view::*;
pub use text_field::*;
pub use theme::*;

use gpui::App;

/// Install the globals the views rely on. Call once before opening a window.
pub fn init(cx: &mut App) {
    cx.set_global(Theme::dark());
}
