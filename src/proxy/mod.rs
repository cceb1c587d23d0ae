//! Playlist output
//!
//! Serializes the channel store back into extended M3U for players.

pub mod generator;

pub use generator::generate_m3u;
