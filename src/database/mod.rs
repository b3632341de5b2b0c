pub mod adoptions;
pub mod donations;
pub mod models;
pub mod payments;
pub mod pets;
pub mod pool;
pub mod users;

pub use pool::StoreError;
