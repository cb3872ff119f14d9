pub mod claim;
pub mod game;
pub mod ticket;

pub use claim::*;
pub use game::*;
pub use ticket::*;
