pub mod ast;
pub mod marker;
pub mod pruner;
pub mod source;
