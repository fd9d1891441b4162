pub mod capability;
pub mod dispatch;
pub mod intent;
pub mod price;

pub use capability::*;
pub use dispatch::*;
pub use intent::*;
pub use price::*;
