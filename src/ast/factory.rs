// Node constructors, called bottom-up by the parser as it reduces grammar
// productions. Children passed in are moved into the new node; string
// arguments are copied.

use crate::ast::list::NodeList;
use crate::ast::node::Node;
use crate::ast::operators::{BinaryOperator, PrimitiveType, UnaryOperator};

pub fn make_int_literal(value: i32) -> Node {
    Node::IntLiteral(value)
}

pub fn make_char_literal(value: char) -> Node {
    Node::CharLiteral(value)
}

pub fn make_string_literal(text: &str) -> Node {
    Node::StringLiteral(text.to_owned())
}

pub fn make_variable(name: &str) -> Node {
    Node::Variable(name.to_owned())
}

pub fn make_type_ref(ty: PrimitiveType) -> Node {
    Node::TypeRef(ty)
}

pub fn make_binary_op(op: BinaryOperator, left: Node, right: Node) -> Node {
    Node::BinaryOp {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

pub fn make_unary_op(op: UnaryOperator, operand: Node) -> Node {
    Node::UnaryOp {
        op,
        operand: Box::new(operand),
    }
}

pub fn make_if(condition: Node, then_branch: Node, else_branch: Option<Node>) -> Node {
    Node::If {
        condition: Box::new(condition),
        then_branch: Box::new(then_branch),
        else_branch: else_branch.map(Box::new),
    }
}

pub fn make_while(condition: Node, body: Node) -> Node {
    Node::While {
        condition: Box::new(condition),
        body: Box::new(body),
    }
}

/// `for (init; condition; increment) body`. Every clause may be missing,
/// so `for (;;);` is `make_for(None, None, None, None)`.
pub fn make_for(
    init: Option<Node>,
    condition: Option<Node>,
    increment: Option<Node>,
    body: Option<Node>,
) -> Node {
    Node::For {
        init: init.map(Box::new),
        condition: condition.map(Box::new),
        increment: increment.map(Box::new),
        body: body.map(Box::new),
    }
}

/// `params` is `None` for a function taking no parameters; `body` is `None`
/// for a prototype.
pub fn make_function_definition(
    return_type: Node,
    name: &str,
    params: Option<NodeList>,
    body: Option<Node>,
) -> Node {
    Node::FunctionDefinition {
        return_type: Box::new(return_type),
        name: name.to_owned(),
        params: params.unwrap_or_default(),
        body: body.map(Box::new),
    }
}

pub fn make_variable_declaration(var_type: Node, name: &str, initializer: Option<Node>) -> Node {
    Node::VariableDeclaration {
        var_type: Box::new(var_type),
        name: name.to_owned(),
        initializer: initializer.map(Box::new),
    }
}

pub fn make_parameter(param_type: Node, name: &str) -> Node {
    Node::Parameter {
        param_type: Box::new(param_type),
        name: name.to_owned(),
    }
}

pub fn make_block(statements: Option<NodeList>) -> Node {
    Node::Block {
        statements: statements.unwrap_or_default(),
    }
}

pub fn make_return(value: Option<Node>) -> Node {
    Node::Return {
        value: value.map(Box::new),
    }
}

pub fn make_assign(target: Node, value: Node) -> Node {
    Node::Assign {
        target: Box::new(target),
        value: Box::new(value),
    }
}

pub fn make_function_call(name: &str, args: Option<NodeList>) -> Node {
    Node::FunctionCall {
        name: name.to_owned(),
        args: args.unwrap_or_default(),
    }
}

/// The empty statement `;`.
pub fn make_empty() -> Node {
    Node::Empty
}
