pub mod classify;
pub mod events;
pub mod player;
pub mod render;
pub mod side;
pub mod sink;
pub mod source;
pub mod summary;

pub use player::PlayerAggregate;
pub use summary::DemoSummary;
