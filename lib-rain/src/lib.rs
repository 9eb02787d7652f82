mod components;
mod session;
mod spawner;

pub mod ease;

pub use components::*;
pub use session::*;
pub use spawner::*;
