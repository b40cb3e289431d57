pub mod check;
pub mod filter;
pub mod gantt;
pub mod options;
pub mod projection;
pub mod registry;
pub mod table;
