//! davshelf-parser: turn release file names into search queries.
//!
//! Release names carry noise (season/episode markers, resolutions, years,
//! dot and underscore delimiters) that defeats a metadata search. This crate
//! strips that noise with a fixed, ordered set of rules. No attempt is made
//! to tell a real tag from part of a title: `"1917.mkv"` guesses to an empty
//! string.

mod title;

pub use title::guess_title;
