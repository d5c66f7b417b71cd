mod manager;
mod persistence;

pub use manager::{ProfileStore, Vote};
pub use persistence::{load_profiles, save_profiles};
