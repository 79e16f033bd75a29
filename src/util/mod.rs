pub mod block;
pub mod id;
pub mod list;
