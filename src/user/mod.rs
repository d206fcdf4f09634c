pub mod entity;
pub mod profile;

pub use entity::User;
pub use profile::Profile;
