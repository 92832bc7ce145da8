pub mod dynamic_form;

pub use dynamic_form::DynamicForm;
