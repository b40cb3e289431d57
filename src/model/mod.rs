pub mod record;
pub mod column;
pub mod view;
pub mod config;
pub mod schedule;

pub use record::*;
pub use column::*;
pub use view::*;
pub use config::*;
pub use schedule::*;
