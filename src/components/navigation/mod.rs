pub mod compact_menu;
pub mod flyout;
pub mod navigation_bar;
pub mod wide_menu;

pub use compact_menu::CompactMenu;
pub use flyout::Flyout;
pub use navigation_bar::NavigationBar;
pub use wide_menu::WideMenu;
