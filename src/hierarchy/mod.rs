pub mod node;
pub mod build;
pub mod filter;
pub mod outline;

pub use node::Node;
pub use build::build_hierarchy;
pub use filter::filter_hierarchy;
pub use outline::format_outline;
