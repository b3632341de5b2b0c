pub mod adoptions;
pub mod donations;
pub mod payments;
pub mod pets;
