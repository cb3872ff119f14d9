pub mod claim;
pub mod game;
pub mod ticket;

pub use claim::claim_config;
pub use game::game_config;
pub use ticket::ticket_config;
