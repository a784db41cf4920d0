mod bookmark;
mod follow;
mod like;
mod message;
mod reference;
mod status;
mod tuit;
mod user;

pub use bookmark::*;
pub use follow::*;
pub use like::*;
pub use message::*;
pub use reference::*;
pub use status::*;
pub use tuit::*;
pub use user::*;
