mod card;
mod carousel_view;
mod nav_bar;

pub use self::card::{badge, card_frame, BadgeStyle};
pub use self::carousel_view::{CarouselOutput, CarouselView};
pub use self::nav_bar::{indicator_fallback_x, NavBar, NavBarOutput, INDICATOR_GAP, INDICATOR_WIDTH};
