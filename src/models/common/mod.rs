pub mod entity;
pub mod long_text;

pub use entity::EntityAttributes;
pub use long_text::LongText;
