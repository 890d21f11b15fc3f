pub mod post_store;

pub use post_store::{merge, PostStore};
