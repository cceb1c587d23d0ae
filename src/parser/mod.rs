//! Playlist parsing
//!
//! Turns uploaded playlist text into [`Channel`](crate::models::Channel)
//! records. Only the channel-metadata subset of extended M3U is understood.

pub mod m3u;

pub use m3u::{parse_m3u, parse_playlist, ExtinfAttributes};
