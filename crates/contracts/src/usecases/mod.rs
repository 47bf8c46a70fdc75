pub mod common;
pub mod u101_update_subform;
