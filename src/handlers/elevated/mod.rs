pub mod donations;
pub mod pets;
pub mod users;
