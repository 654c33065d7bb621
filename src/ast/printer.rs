use crate::ast::list::NodeList;
use crate::ast::node::Node;
use crate::config::printer::INDENT_UNIT;
use crate::errors::AstResult;
use std::io::{self, Write};

/// Indented text dump of a tree, one label line per node.
///
/// Each node prints its label at the current level, then only the children
/// meaningful for its variant. When a node shows more than one child, each
/// child is introduced by a role line (`Cond:`, `Then:` ...) one level
/// deeper and printed two levels deeper. Missing optional children print
/// nothing, role line included. Sequence members print one after another
/// at the same level.
///
/// Printing recurses once per nesting level, so its depth is bounded by
/// the thread's stack.
pub struct AstPrinter<W: Write> {
    out: W,
}

impl<W: Write> AstPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn indent(&mut self, level: usize) -> io::Result<()> {
        for _ in 0..level {
            self.out.write_all(INDENT_UNIT.as_bytes())?;
        }
        Ok(())
    }

    fn line(&mut self, level: usize, text: &str) -> io::Result<()> {
        self.indent(level)?;
        writeln!(self.out, "{}", text)
    }

    fn section(&mut self, level: usize, role: &str, child: &Node) -> io::Result<()> {
        self.line(level + 1, role)?;
        self.print_node(Some(child), level + 2)
    }

    fn optional_section(&mut self, level: usize, role: &str, child: Option<&Node>) -> io::Result<()> {
        match child {
            Some(child) => self.section(level, role, child),
            None => Ok(()),
        }
    }

    pub fn print_list(&mut self, list: &NodeList, level: usize) -> io::Result<()> {
        for node in list {
            self.print_node(Some(node), level)?;
        }
        Ok(())
    }

    pub fn print_node(&mut self, node: Option<&Node>, level: usize) -> io::Result<()> {
        let node = match node {
            Some(node) => node,
            None => return Ok(()),
        };
        let label = node.kind().name();

        match node {
            Node::FunctionDefinition {
                return_type,
                name,
                params,
                body,
            } => {
                self.line(level, &format!("{}: {}", label, name))?;
                self.section(level, "Return Type:", return_type)?;
                self.line(level + 1, "Params:")?;
                self.print_list(params, level + 2)?;
                self.optional_section(level, "Body:", body.as_deref())
            }
            Node::VariableDeclaration {
                var_type,
                name,
                initializer,
            } => {
                self.line(level, &format!("{}: {}", label, name))?;
                self.print_node(Some(var_type), level + 1)?;
                self.optional_section(level, "Initializer:", initializer.as_deref())
            }
            Node::Parameter { param_type, name } => {
                self.line(level, &format!("{}: {}", label, name))?;
                self.print_node(Some(param_type), level + 1)
            }
            Node::Block { statements } => {
                self.line(level, label)?;
                self.print_list(statements, level + 1)
            }
            Node::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.line(level, label)?;
                self.section(level, "Cond:", condition)?;
                self.section(level, "Then:", then_branch)?;
                self.optional_section(level, "Else:", else_branch.as_deref())
            }
            Node::While { condition, body } => {
                self.line(level, label)?;
                self.section(level, "Cond:", condition)?;
                self.section(level, "Body:", body)
            }
            Node::For {
                init,
                condition,
                increment,
                body,
            } => {
                self.line(level, label)?;
                self.optional_section(level, "Init:", init.as_deref())?;
                self.optional_section(level, "Cond:", condition.as_deref())?;
                self.optional_section(level, "Incr:", increment.as_deref())?;
                self.optional_section(level, "Body:", body.as_deref())
            }
            Node::Return { value } => {
                self.line(level, label)?;
                self.print_node(value.as_deref(), level + 1)
            }
            Node::Assign { target, value } => {
                self.line(level, label)?;
                self.print_node(Some(target), level + 1)?;
                self.print_node(Some(value), level + 1)
            }
            Node::BinaryOp { op, left, right } => {
                self.line(level, &format!("{}: {}", label, op))?;
                self.print_node(Some(left), level + 1)?;
                self.print_node(Some(right), level + 1)
            }
            Node::UnaryOp { op, operand } => {
                self.line(level, &format!("{}: {}", label, op))?;
                self.print_node(Some(operand), level + 1)
            }
            Node::IntLiteral(value) => self.line(level, &format!("{}: {}", label, value)),
            Node::CharLiteral(value) => {
                self.line(level, &format!("{}: '{}'", label, value.escape_debug()))
            }
            Node::StringLiteral(text) => {
                self.line(level, &format!("{}: \"{}\"", label, text.escape_debug()))
            }
            Node::Variable(name) => self.line(level, &format!("{}: {}", label, name)),
            Node::FunctionCall { name, args } => {
                self.line(level, &format!("{}: {}", label, name))?;
                self.line(level + 1, "Args:")?;
                self.print_list(args, level + 2)
            }
            Node::TypeRef(ty) => self.line(level, &format!("{}: {}", label, ty)),
            Node::Empty => self.line(level, label),
        }
    }
}

/// Writes the dump of `node` to `out`. A missing node writes nothing.
pub fn write_ast<W: Write>(out: &mut W, node: Option<&Node>, level: usize) -> AstResult<()> {
    AstPrinter::new(out).print_node(node, level)?;
    Ok(())
}

pub fn write_list<W: Write>(out: &mut W, list: &NodeList, level: usize) -> AstResult<()> {
    AstPrinter::new(out).print_list(list, level)?;
    Ok(())
}

/// Dumps `node` to standard output.
pub fn print_ast(node: Option<&Node>, level: usize) -> AstResult<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_ast(&mut handle, node, level)?;
    handle.flush()?;
    Ok(())
}

pub fn print_list(list: &NodeList, level: usize) -> AstResult<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_list(&mut handle, list, level)?;
    handle.flush()?;
    Ok(())
}

pub fn render_ast(node: Option<&Node>, level: usize) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec<u8> cannot fail
    let _ = write_ast(&mut buf, node, level);
    String::from_utf8_lossy(&buf).into_owned()
}

pub fn render_list(list: &NodeList, level: usize) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_list(&mut buf, list, level);
    String::from_utf8_lossy(&buf).into_owned()
}
