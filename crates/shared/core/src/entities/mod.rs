mod player;
mod position;
mod squad;
mod status;

pub use player::Player;
pub use position::Position;
pub use squad::Squad;
pub use status::PlayerStatus;
