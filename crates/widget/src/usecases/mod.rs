pub mod u101_update_subform;
