pub mod actions;
pub mod identity;
pub mod model;
pub mod reducer;
pub mod repo;
pub mod search;
pub mod state;

pub use actions::*;
pub use identity::*;
pub use model::*;
pub use reducer::*;
pub use repo::*;
pub use search::*;
pub use state::*;
