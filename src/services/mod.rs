//! Application services shared by the web handlers

pub mod channel_store;

pub use channel_store::ChannelStore;
