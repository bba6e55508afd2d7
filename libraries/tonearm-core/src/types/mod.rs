mod artwork;
mod track;

pub use artwork::Artwork;
pub use track::{Track, TrackId};
