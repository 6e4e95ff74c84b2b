mod category;
mod ids;
mod playlist;
mod track;

pub use category::Category;
pub use ids::{PlaylistId, TrackId, VideoId};
pub use playlist::Playlist;
pub use track::{Availability, Track};
