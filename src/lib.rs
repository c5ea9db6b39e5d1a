pub mod logging;
pub mod nary_tree;
pub mod tree;

pub use nary_tree::Tree;
pub use tree::TreeOps;
