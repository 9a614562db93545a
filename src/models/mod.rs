pub mod history;
pub mod payment;
pub mod user;

pub use history::*;
pub use payment::*;
pub use user::*;
