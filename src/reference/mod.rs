pub mod themes;
pub mod roles;
pub mod tracks;

pub use themes::*;
pub use roles::*;
pub use tracks::*;
