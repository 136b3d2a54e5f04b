//! Routed pages. Platform crates map their `Route` variants onto these.

mod about;
mod home;
mod not_found;
mod projects;
mod work;

pub use about::About;
pub use home::Home;
pub use not_found::NotFound;
pub use projects::Projects;
pub use work::Work;
