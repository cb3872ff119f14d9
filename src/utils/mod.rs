pub mod draw;

pub use draw::{DrawError, POOL_SIZE, draw_number};
