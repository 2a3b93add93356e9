mod event;
mod sink;

pub use event::{
    PayloadActiveSection, PayloadCarouselScroll, PayloadDemo, PayloadLanguage, PayloadTheme,
    SiteEvent,
};

pub use sink::EventSink;
