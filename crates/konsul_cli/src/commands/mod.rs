pub mod delete;
pub mod export;
pub mod list;
pub mod rebuild;
pub mod seed;
pub mod set_status;
pub mod stats;
