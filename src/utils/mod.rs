pub mod indent;
pub mod sanitize;
pub mod validate;

pub use indent::indent;
pub use sanitize::{sanitize_long_text, sanitize_name, sanitize_title};
pub use validate::{FieldType, check_field, check_field_with_label};
