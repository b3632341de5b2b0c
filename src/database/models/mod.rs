pub mod adoption;
pub mod donation;
pub mod payment;
pub mod pet;
pub mod user;

pub use adoption::AdoptionRequest;
pub use donation::Donation;
pub use payment::Payment;
pub use pet::Pet;
pub use user::{Role, User};
