pub mod donations;
pub mod pets;
pub mod tokens;
pub mod users;
