pub mod brand;
pub mod icons;
pub mod navigation;

pub use brand::Brand;
pub use icons::{ChevronDownIcon, CloseIcon, MenuIcon};
pub use navigation::{CompactMenu, Flyout, NavigationBar, WideMenu};
