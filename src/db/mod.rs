pub mod categories;
pub mod ingredients;
pub mod recipes;
pub mod service;
pub mod users;
