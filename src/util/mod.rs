pub mod assets;
pub mod dates;
pub mod persistence;
pub mod version;
