pub mod event;
pub mod feed;

pub use event::{EventMarker, MagnitudeBucket};
pub use feed::{load_feed, parse_feed, FeedFilter};
