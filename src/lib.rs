#![warn(missing_docs)]
#![warn(clippy::pedantic)]
//#![warn(clippy::cargo)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

//! An interpreter for KSM, a small scripting language with variable
//! declarations, printing and conditionals.
//!
//! Source text flows through the [`Lexer`], the [`Parser`] and finally the
//! [`Interpreter`], which keeps its variables between runs.

/// Abstract Syntax Tree
pub mod ast;
/// Controls the command line interface
pub mod cli;
/// Variable storage
pub mod environment;
/// Errors
pub mod error;
/// Lexer
pub mod lexer;
/// Destination for program output
pub mod output;
/// Tokens
pub mod token;
/// AST visitors
pub mod visitors;

pub use ast::Parser;
pub use environment::Environment;
pub use error::{InterpreterError, ParserError};
pub use lexer::Lexer;
pub use output::{Echo, Output};
pub use token::{Token, TokenKind};
pub use visitors::{Inspector, Interpreter};
