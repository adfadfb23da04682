// HTTP routes
pub mod clean;
pub mod health;
pub mod lyrics;

pub use self::clean::*;
pub use self::health::*;
pub use self::lyrics::*;
