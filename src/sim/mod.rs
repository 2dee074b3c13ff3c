pub mod constants;
pub mod skeleton;
pub mod snapshot;
pub mod state;
pub mod systems;
pub mod tick;
