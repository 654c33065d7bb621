use crate::ast::list::NodeList;
use crate::ast::node::{Node, NodeKind};
use crate::errors::AstResult;

/// Read-only traversal over a tree. The default methods walk every
/// variant-relevant child; implementors override the hooks they need and
/// call [`walk_node`] to keep descending.
pub trait AstVisitor {
    fn visit_node(&mut self, node: &Node) -> AstResult<()> {
        walk_node(self, node)
    }

    fn visit_list(&mut self, list: &NodeList) -> AstResult<()> {
        for node in list {
            self.visit_node(node)?;
        }
        Ok(())
    }

    /// Called for the identifier of every named node.
    fn visit_identifier(&mut self, _owner: NodeKind, _name: &str) -> AstResult<()> {
        Ok(())
    }

    /// Called for every slot that must hold a type designator.
    fn visit_type_slot(&mut self, _owner: NodeKind, _slot: &Node) -> AstResult<()> {
        Ok(())
    }
}

fn visit_opt<V: AstVisitor + ?Sized>(visitor: &mut V, node: Option<&Node>) -> AstResult<()> {
    match node {
        Some(node) => visitor.visit_node(node),
        None => Ok(()),
    }
}

pub fn walk_node<V: AstVisitor + ?Sized>(visitor: &mut V, node: &Node) -> AstResult<()> {
    let kind = node.kind();
    if let Some(name) = node.name() {
        visitor.visit_identifier(kind, name)?;
    }

    match node {
        Node::FunctionDefinition {
            return_type,
            params,
            body,
            ..
        } => {
            visitor.visit_type_slot(kind, return_type)?;
            visitor.visit_node(return_type)?;
            visitor.visit_list(params)?;
            visit_opt(visitor, body.as_deref())
        }
        Node::VariableDeclaration {
            var_type,
            initializer,
            ..
        } => {
            visitor.visit_type_slot(kind, var_type)?;
            visitor.visit_node(var_type)?;
            visit_opt(visitor, initializer.as_deref())
        }
        Node::Parameter { param_type, .. } => {
            visitor.visit_type_slot(kind, param_type)?;
            visitor.visit_node(param_type)
        }
        Node::Block { statements } => visitor.visit_list(statements),
        Node::If {
            condition,
            then_branch,
            else_branch,
        } => {
            visitor.visit_node(condition)?;
            visitor.visit_node(then_branch)?;
            visit_opt(visitor, else_branch.as_deref())
        }
        Node::While { condition, body } => {
            visitor.visit_node(condition)?;
            visitor.visit_node(body)
        }
        Node::For {
            init,
            condition,
            increment,
            body,
        } => {
            visit_opt(visitor, init.as_deref())?;
            visit_opt(visitor, condition.as_deref())?;
            visit_opt(visitor, increment.as_deref())?;
            visit_opt(visitor, body.as_deref())
        }
        Node::Return { value } => visit_opt(visitor, value.as_deref()),
        Node::Assign { target, value } => {
            visitor.visit_node(target)?;
            visitor.visit_node(value)
        }
        Node::BinaryOp { left, right, .. } => {
            visitor.visit_node(left)?;
            visitor.visit_node(right)
        }
        Node::UnaryOp { operand, .. } => visitor.visit_node(operand),
        Node::FunctionCall { args, .. } => visitor.visit_list(args),
        Node::IntLiteral(_)
        | Node::CharLiteral(_)
        | Node::StringLiteral(_)
        | Node::Variable(_)
        | Node::TypeRef(_)
        | Node::Empty => Ok(()),
    }
}

/// Counts every node reachable through owned children.
#[derive(Debug, Default)]
pub struct NodeCounter {
    pub count: usize,
}

impl AstVisitor for NodeCounter {
    fn visit_node(&mut self, node: &Node) -> AstResult<()> {
        self.count += 1;
        walk_node(self, node)
    }
}
