mod home;
mod not_found;
mod secret;

pub use home::*;
pub use not_found::*;
pub use secret::*;
