pub mod annotation;
pub mod error;
pub mod node;


pub use annotation::Annotations;
pub use error::{TreeError, TreeResult};
pub use node::{Node, Property, Value};
