pub mod repository;
pub mod song_lookup;

pub use repository::{Entity, Repository, StoreError};
pub use song_lookup::SongLookup;
