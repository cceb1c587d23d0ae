//! HTTP handlers organized by resource

pub mod channels;
pub mod epg;
pub mod health;
pub mod playlist;
