pub mod git;
pub mod social;

pub use social::{poster_from_env, Announcement, ConsolePoster, HttpPoster, SocialPoster};
