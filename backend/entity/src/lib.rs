pub mod module;
pub mod project;
pub mod test_case;
