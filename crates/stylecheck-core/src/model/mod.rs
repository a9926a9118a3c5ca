pub mod paragraph;
pub mod property_set;
pub mod style;

pub use paragraph::{paragraph_number, ListKind, Paragraph};
pub use property_set::PropertySet;
pub use style::{Style, Substyle};
