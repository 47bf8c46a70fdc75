pub mod a001_deal;
pub mod a002_product_line;
pub mod common;
