pub mod use_compact_viewport;
pub mod use_nav_state;
pub mod use_scroll_elevation;

pub use use_compact_viewport::use_compact_viewport;
pub use use_nav_state::{use_nav_state, NavController};
pub use use_scroll_elevation::use_scroll_elevation;
