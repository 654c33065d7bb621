use crate::ast::list::NodeList;
use crate::ast::operators::{BinaryOperator, PrimitiveType, UnaryOperator};
use crate::ast::visitor::{AstVisitor, NodeCounter};
use crate::ast::printer::render_ast;
use crate::errors::{AstError, AstResult};

/// A node of the abstract syntax tree.
///
/// Each variant carries only the children meaningful for it. Children are
/// owned and freed with the root; dropping uses an explicit stack, so deep
/// expression chains do not exhaust the call stack. Ordered sequences
/// (statements, parameters, arguments) live in a [`NodeList`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    FunctionDefinition {
        return_type: Box<Node>,
        name: String,
        params: NodeList,
        /// `None` for a prototype.
        body: Option<Box<Node>>,
    },
    VariableDeclaration {
        var_type: Box<Node>,
        name: String,
        initializer: Option<Box<Node>>,
    },
    Parameter {
        param_type: Box<Node>,
        name: String,
    },
    Block {
        statements: NodeList,
    },
    If {
        condition: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Option<Box<Node>>,
    },
    While {
        condition: Box<Node>,
        body: Box<Node>,
    },
    For {
        init: Option<Box<Node>>,
        condition: Option<Box<Node>>,
        increment: Option<Box<Node>>,
        body: Option<Box<Node>>,
    },
    Return {
        value: Option<Box<Node>>,
    },
    Assign {
        target: Box<Node>,
        value: Box<Node>,
    },
    BinaryOp {
        op: BinaryOperator,
        left: Box<Node>,
        right: Box<Node>,
    },
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Node>,
    },
    IntLiteral(i32),
    CharLiteral(char),
    StringLiteral(String),
    Variable(String),
    FunctionCall {
        name: String,
        args: NodeList,
    },
    TypeRef(PrimitiveType),
    Empty,
}

/// The tag identifying which construct a [`Node`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    FunctionDefinition,
    VariableDeclaration,
    Parameter,
    Block,
    If,
    While,
    For,
    Return,
    Assign,
    BinaryOp,
    UnaryOp,
    IntLiteral,
    CharLiteral,
    StringLiteral,
    Variable,
    FunctionCall,
    TypeRef,
    Empty,
}

impl NodeKind {
    // Ordered by tag value
    pub const ALL: [NodeKind; 18] = [
        NodeKind::FunctionDefinition,
        NodeKind::VariableDeclaration,
        NodeKind::Parameter,
        NodeKind::Block,
        NodeKind::If,
        NodeKind::While,
        NodeKind::For,
        NodeKind::Return,
        NodeKind::Assign,
        NodeKind::BinaryOp,
        NodeKind::UnaryOp,
        NodeKind::IntLiteral,
        NodeKind::CharLiteral,
        NodeKind::StringLiteral,
        NodeKind::Variable,
        NodeKind::FunctionCall,
        NodeKind::TypeRef,
        NodeKind::Empty,
    ];

    /// Name used on the node's label line by the tree printer.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::FunctionDefinition => "FunctionDef",
            NodeKind::VariableDeclaration => "VarDecl",
            NodeKind::Parameter => "Param",
            NodeKind::Block => "Block",
            NodeKind::If => "If",
            NodeKind::While => "While",
            NodeKind::For => "For",
            NodeKind::Return => "Return",
            NodeKind::Assign => "Assign",
            NodeKind::BinaryOp => "BinOp",
            NodeKind::UnaryOp => "UnOp",
            NodeKind::IntLiteral => "Int",
            NodeKind::CharLiteral => "Char",
            NodeKind::StringLiteral => "String",
            NodeKind::Variable => "Var",
            NodeKind::FunctionCall => "Call",
            NodeKind::TypeRef => "Type",
            NodeKind::Empty => "Empty",
        }
    }

    pub fn tag(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for NodeKind {
    type Error = AstError;

    fn try_from(tag: u8) -> AstResult<Self> {
        NodeKind::ALL
            .get(tag as usize)
            .copied()
            .ok_or(AstError::UnknownNodeKind(tag))
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::FunctionDefinition { .. } => NodeKind::FunctionDefinition,
            Node::VariableDeclaration { .. } => NodeKind::VariableDeclaration,
            Node::Parameter { .. } => NodeKind::Parameter,
            Node::Block { .. } => NodeKind::Block,
            Node::If { .. } => NodeKind::If,
            Node::While { .. } => NodeKind::While,
            Node::For { .. } => NodeKind::For,
            Node::Return { .. } => NodeKind::Return,
            Node::Assign { .. } => NodeKind::Assign,
            Node::BinaryOp { .. } => NodeKind::BinaryOp,
            Node::UnaryOp { .. } => NodeKind::UnaryOp,
            Node::IntLiteral(_) => NodeKind::IntLiteral,
            Node::CharLiteral(_) => NodeKind::CharLiteral,
            Node::StringLiteral(_) => NodeKind::StringLiteral,
            Node::Variable(_) => NodeKind::Variable,
            Node::FunctionCall { .. } => NodeKind::FunctionCall,
            Node::TypeRef(_) => NodeKind::TypeRef,
            Node::Empty => NodeKind::Empty,
        }
    }

    /// The identifier carried by named nodes.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::FunctionDefinition { name, .. }
            | Node::VariableDeclaration { name, .. }
            | Node::Parameter { name, .. }
            | Node::FunctionCall { name, .. }
            | Node::Variable(name) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            Node::Assign { .. }
                | Node::BinaryOp { .. }
                | Node::UnaryOp { .. }
                | Node::IntLiteral(_)
                | Node::CharLiteral(_)
                | Node::StringLiteral(_)
                | Node::Variable(_)
                | Node::FunctionCall { .. }
        )
    }

    /// Owned children in the order the printer visits them. Sequence
    /// members are flattened in place.
    pub fn children(&self) -> Vec<&Node> {
        let mut out: Vec<&Node> = Vec::new();
        match self {
            Node::FunctionDefinition {
                return_type,
                params,
                body,
                ..
            } => {
                out.push(return_type);
                out.extend(params.iter());
                out.extend(body.as_deref());
            }
            Node::VariableDeclaration {
                var_type,
                initializer,
                ..
            } => {
                out.push(var_type);
                out.extend(initializer.as_deref());
            }
            Node::Parameter { param_type, .. } => out.push(param_type),
            Node::Block { statements } => out.extend(statements.iter()),
            Node::If {
                condition,
                then_branch,
                else_branch,
            } => {
                out.push(condition);
                out.push(then_branch);
                out.extend(else_branch.as_deref());
            }
            Node::While { condition, body } => {
                out.push(condition);
                out.push(body);
            }
            Node::For {
                init,
                condition,
                increment,
                body,
            } => {
                out.extend(init.as_deref());
                out.extend(condition.as_deref());
                out.extend(increment.as_deref());
                out.extend(body.as_deref());
            }
            Node::Return { value } => out.extend(value.as_deref()),
            Node::Assign { target, value } => {
                out.push(target);
                out.push(value);
            }
            Node::BinaryOp { left, right, .. } => {
                out.push(left);
                out.push(right);
            }
            Node::UnaryOp { operand, .. } => out.push(operand),
            Node::FunctionCall { args, .. } => out.extend(args.iter()),
            Node::IntLiteral(_)
            | Node::CharLiteral(_)
            | Node::StringLiteral(_)
            | Node::Variable(_)
            | Node::TypeRef(_)
            | Node::Empty => {}
        }
        out
    }

    /// Number of nodes in this subtree, the node itself included.
    pub fn count(&self) -> usize {
        let mut counter = NodeCounter::default();
        // NodeCounter never reports an error
        let _ = counter.visit_node(self);
        counter.count
    }
}

impl Node {
    // Moves every owned child into `out`, leaving this node childless.
    fn detach_children(&mut self, out: &mut Vec<Node>) {
        fn take(slot: &mut Box<Node>, out: &mut Vec<Node>) {
            out.push(std::mem::replace(&mut **slot, Node::Empty));
        }
        fn take_opt(slot: &mut Option<Box<Node>>, out: &mut Vec<Node>) {
            if let Some(child) = slot.take() {
                out.push(*child);
            }
        }

        match self {
            Node::FunctionDefinition {
                return_type,
                params,
                body,
                ..
            } => {
                take(return_type, out);
                out.extend(std::mem::take(params));
                take_opt(body, out);
            }
            Node::VariableDeclaration {
                var_type,
                initializer,
                ..
            } => {
                take(var_type, out);
                take_opt(initializer, out);
            }
            Node::Parameter { param_type, .. } => take(param_type, out),
            Node::Block { statements } => out.extend(std::mem::take(statements)),
            Node::If {
                condition,
                then_branch,
                else_branch,
            } => {
                take(condition, out);
                take(then_branch, out);
                take_opt(else_branch, out);
            }
            Node::While { condition, body } => {
                take(condition, out);
                take(body, out);
            }
            Node::For {
                init,
                condition,
                increment,
                body,
            } => {
                take_opt(init, out);
                take_opt(condition, out);
                take_opt(increment, out);
                take_opt(body, out);
            }
            Node::Return { value } => take_opt(value, out),
            Node::Assign { target, value } => {
                take(target, out);
                take(value, out);
            }
            Node::BinaryOp { left, right, .. } => {
                take(left, out);
                take(right, out);
            }
            Node::UnaryOp { operand, .. } => take(operand, out),
            Node::FunctionCall { args, .. } => out.extend(std::mem::take(args)),
            Node::IntLiteral(_)
            | Node::CharLiteral(_)
            | Node::StringLiteral(_)
            | Node::Variable(_)
            | Node::TypeRef(_)
            | Node::Empty => {}
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        // Each popped node is childless by the time it is dropped
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_ast(Some(self), 0))
    }
}
