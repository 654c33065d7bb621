use crate::ast::{walk_node, AstVisitor, Node, NodeKind, NodeList};
use crate::config::validation::{IDENTIFIER_PATTERN, MAX_IDENTIFIER_LEN};
use crate::errors::{AstError, AstResult};
use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(IDENTIFIER_PATTERN).expect("identifier pattern is a valid regex"));

pub fn is_valid_identifier(name: &str) -> bool {
    name.len() <= MAX_IDENTIFIER_LEN && IDENTIFIER_RE.is_match(name)
}

/// Checks the structural shape of a tree handed over by the parser and
/// reports the first violation found, in printer order. Types and scopes
/// are not checked here.
pub fn validate_tree(node: &Node) -> AstResult<()> {
    TreeValidator.visit_node(node)
}

pub fn validate_list(list: &NodeList) -> AstResult<()> {
    TreeValidator.visit_list(list)
}

struct TreeValidator;

fn expect_expression(owner: NodeKind, role: &str, node: &Node) -> AstResult<()> {
    if node.is_expression() {
        Ok(())
    } else {
        Err(AstError::malformed(
            owner.name(),
            format!("{} must be an expression, found {}", role, node.kind()),
        ))
    }
}

fn expect_opt_expression(owner: NodeKind, role: &str, node: Option<&Node>) -> AstResult<()> {
    match node {
        Some(node) => expect_expression(owner, role, node),
        None => Ok(()),
    }
}

impl AstVisitor for TreeValidator {
    fn visit_node(&mut self, node: &Node) -> AstResult<()> {
        let kind = node.kind();
        match node {
            Node::VariableDeclaration { initializer, .. } => {
                expect_opt_expression(kind, "initializer", initializer.as_deref())?;
            }
            Node::If { condition, .. } | Node::While { condition, .. } => {
                expect_expression(kind, "condition", condition)?;
            }
            Node::For {
                init,
                condition,
                increment,
                ..
            } => {
                expect_opt_expression(kind, "init clause", init.as_deref())?;
                expect_opt_expression(kind, "condition", condition.as_deref())?;
                expect_opt_expression(kind, "increment clause", increment.as_deref())?;
            }
            Node::Return { value } => {
                expect_opt_expression(kind, "returned value", value.as_deref())?;
            }
            Node::Assign { target, value } => {
                expect_expression(kind, "target", target)?;
                expect_expression(kind, "assigned value", value)?;
            }
            Node::BinaryOp { left, right, .. } => {
                expect_expression(kind, "left operand", left)?;
                expect_expression(kind, "right operand", right)?;
            }
            Node::UnaryOp { operand, .. } => {
                expect_expression(kind, "operand", operand)?;
            }
            Node::FunctionDefinition { params, .. } => {
                if let Some(param) = params.iter().find(|p| p.kind() != NodeKind::Parameter) {
                    return Err(AstError::malformed(
                        kind.name(),
                        format!("parameter list holds a {} node", param.kind()),
                    ));
                }
            }
            Node::FunctionCall { args, .. } => {
                for arg in args {
                    expect_expression(kind, "argument", arg)?;
                }
            }
            _ => {}
        }
        walk_node(self, node)
    }

    fn visit_identifier(&mut self, owner: NodeKind, name: &str) -> AstResult<()> {
        if is_valid_identifier(name) {
            Ok(())
        } else {
            Err(AstError::invalid_identifier(name, owner.name()))
        }
    }

    fn visit_type_slot(&mut self, owner: NodeKind, slot: &Node) -> AstResult<()> {
        match slot {
            Node::TypeRef(_) => Ok(()),
            other => Err(AstError::malformed(
                owner.name(),
                format!("type slot holds a {} node", other.kind()),
            )),
        }
    }
}
