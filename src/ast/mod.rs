// Abstract syntax tree for the MiniC toolchain.
// The parser builds trees bottom-up through the factory functions; later
// phases consume them read-only, and the printer dumps them for inspection.

mod factory;
mod list;
mod node;
mod operators;
mod printer;
mod visitor;

pub use factory::{
    make_assign, make_binary_op, make_block, make_char_literal, make_empty, make_for,
    make_function_call, make_function_definition, make_if, make_int_literal, make_parameter,
    make_return, make_string_literal, make_type_ref, make_unary_op, make_variable,
    make_variable_declaration, make_while,
};
pub use list::{append_sibling, NodeList};
pub use node::{Node, NodeKind};
pub use operators::{BinaryOperator, PrimitiveType, UnaryOperator};
pub use printer::{print_ast, print_list, render_ast, render_list, write_ast, write_list, AstPrinter};
pub use visitor::{walk_node, AstVisitor, NodeCounter};
