pub mod bracket;
pub mod trilinear;

pub use bracket::{find_bracket, Bracket};
pub use trilinear::{base_distance, speeds, Speeds};
