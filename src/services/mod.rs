pub mod claim_service;
pub mod game_service;
pub mod ticket_service;

pub use claim_service::*;
pub use game_service::*;
pub use ticket_service::*;
