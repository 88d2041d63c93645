/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The expression, statement and declaration sum types
/// - expressions: Node structs for each kind of expression
/// - statements: Node structs for each kind of statement
/// - declarations: Prototypes, function declarations and modules
/// - types: The settable-once type tag carried by expressions
/// - printer: Tree dump used by `--dump-ast`
/// - source: Re-serialisation back to stapl source
/// - comparator: Structural equality ignoring type tags
pub mod ast;
pub mod comparator;
pub mod declarations;
pub mod expressions;
pub mod printer;
pub mod source;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;
