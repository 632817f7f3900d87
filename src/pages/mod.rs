pub mod error;
pub mod genres;
pub mod loader;
pub mod response;
pub mod similar;
pub mod urls;
pub mod view;

pub use error::LoadError;
pub use genres::*;
pub use loader::PageLoader;
pub use similar::*;
pub use view::*;
