mod credentials;
mod table;
mod toast;
mod upload;

pub use credentials::*;
pub use table::*;
pub use toast::*;
pub use upload::*;
