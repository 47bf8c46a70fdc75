pub mod extractor;
pub mod line_item;
pub mod validation;

pub use extractor::extract_line_items;
pub use line_item::{EditableLineItem, LineItem, PriceValue};
pub use validation::validate_line_items;
