pub mod fallback;
pub mod generator;
pub mod provider;
pub mod quota;

pub use generator::*;
pub use provider::*;
pub use quota::*;
