//! Environment store implementations.

mod dotenv;
mod map;
mod system;

pub use dotenv::DotenvEnvironmentAdapter;
pub use map::MapEnvironmentAdapter;
pub use system::SystemEnvironmentAdapter;
