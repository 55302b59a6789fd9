/// Renders the AST as text.
pub mod inspector;
/// Runs the AST.
pub mod interpreter;

pub use inspector::Inspector;
pub use interpreter::Interpreter;
