pub mod error;
pub mod persona;
pub mod types;

pub use error::Error;
pub use persona::Persona;
pub use types::{Article, Manifest, Post, MANIFEST_CAP};

pub type Result<T> = std::result::Result<T, Error>;
