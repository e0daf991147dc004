//! davshelf-core: types shared by every davshelf crate.
//!
//! - [`config`] -- TOML + environment configuration.
//! - [`error`] -- unified [`Error`] and [`Result`].
//! - [`media`] -- [`FileEntry`], [`MetadataResult`], [`DisplayItem`].
//! - [`player`] -- the immutable [`PlayerRegistry`].

pub mod config;
pub mod error;
pub mod media;
pub mod player;

pub use config::Config;
pub use error::{Error, Result};
pub use media::{DisplayItem, FileEntry, MetadataResult};
pub use player::{Player, PlayerRegistry};
