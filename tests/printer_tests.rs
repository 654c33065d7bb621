use minic::ast::*;
use minic::errors::{AstError, AstResult};
use std::io::{self, Write};

fn int_type() -> Node {
    make_type_ref(PrimitiveType::Int)
}

#[test]
fn test_int_literal() {
    let node = make_int_literal(42);
    assert_eq!(render_ast(Some(&node), 0), "Int: 42\n");
}

#[test]
fn test_binary_op() {
    let node = make_binary_op(BinaryOperator::Add, make_int_literal(1), make_int_literal(2));
    assert_eq!(render_ast(Some(&node), 0), "BinOp: +\n  Int: 1\n  Int: 2\n");
}

#[test]
fn test_unary_op() {
    let node = make_unary_op(UnaryOperator::Negate, make_variable("x"));
    assert_eq!(render_ast(Some(&node), 0), "UnOp: -\n  Var: x\n");
}

#[test]
fn test_absent_node_renders_nothing() {
    assert_eq!(render_ast(None, 0), "");
    assert_eq!(render_ast(None, 5), "");
}

#[test]
fn test_indentation_level() {
    let node = make_binary_op(BinaryOperator::Mul, make_int_literal(6), make_int_literal(7));
    assert_eq!(
        render_ast(Some(&node), 2),
        "    BinOp: *\n      Int: 6\n      Int: 7\n"
    );
}

#[test]
fn test_if_without_else() {
    let node = make_if(
        make_variable("x"),
        make_return(Some(make_int_literal(1))),
        None,
    );
    let out = render_ast(Some(&node), 0);
    assert_eq!(out, "If\n  Cond:\n    Var: x\n  Then:\n    Return\n      Int: 1\n");
    assert!(!out.contains("Else:"));
}

#[test]
fn test_if_with_else() {
    let node = make_if(
        make_variable("x"),
        make_return(Some(make_int_literal(1))),
        Some(make_return(Some(make_int_literal(0)))),
    );
    let out = render_ast(Some(&node), 0);
    assert_eq!(out.matches("Else:").count(), 1);
    assert!(out.ends_with("  Else:\n    Return\n      Int: 0\n"));
}

#[test]
fn test_function_definition_without_params() {
    let node = make_function_definition(int_type(), "main", None, Some(make_block(None)));
    assert_eq!(
        render_ast(Some(&node), 0),
        "FunctionDef: main\n  Return Type:\n    Type: int\n  Params:\n  Body:\n    Block\n"
    );
}

#[test]
fn test_function_definition_with_params() {
    let mut params = append_sibling(None, make_parameter(int_type(), "a"));
    params.append(make_parameter(make_type_ref(PrimitiveType::Char), "b"));
    let body = make_block(Some(NodeList::from(make_return(Some(make_variable("a"))))));
    let node = make_function_definition(int_type(), "first", Some(params), Some(body));
    let expected = "FunctionDef: first\n\
                    \x20 Return Type:\n\
                    \x20   Type: int\n\
                    \x20 Params:\n\
                    \x20   Param: a\n\
                    \x20     Type: int\n\
                    \x20   Param: b\n\
                    \x20     Type: char\n\
                    \x20 Body:\n\
                    \x20   Block\n\
                    \x20     Return\n\
                    \x20       Var: a\n";
    assert_eq!(render_ast(Some(&node), 0), expected);
}

#[test]
fn test_prototype_has_no_body_section() {
    let node = make_function_definition(make_type_ref(PrimitiveType::Void), "halt", None, None);
    let out = render_ast(Some(&node), 0);
    assert_eq!(out, "FunctionDef: halt\n  Return Type:\n    Type: void\n  Params:\n");
}

#[test]
fn test_while_loop() {
    let node = make_while(make_variable("running"), make_empty());
    assert_eq!(
        render_ast(Some(&node), 0),
        "While\n  Cond:\n    Var: running\n  Body:\n    Empty\n"
    );
}

#[test]
fn test_for_with_every_clause() {
    let node = make_for(
        Some(make_assign(make_variable("i"), make_int_literal(0))),
        Some(make_binary_op(BinaryOperator::Less, make_variable("i"), make_int_literal(3))),
        Some(make_unary_op(UnaryOperator::Plus, make_variable("i"))),
        Some(make_empty()),
    );
    let expected = "For\n\
                    \x20 Init:\n\
                    \x20   Assign\n\
                    \x20     Var: i\n\
                    \x20     Int: 0\n\
                    \x20 Cond:\n\
                    \x20   BinOp: <\n\
                    \x20     Var: i\n\
                    \x20     Int: 3\n\
                    \x20 Incr:\n\
                    \x20   UnOp: +\n\
                    \x20     Var: i\n\
                    \x20 Body:\n\
                    \x20   Empty\n";
    assert_eq!(render_ast(Some(&node), 0), expected);
}

#[test]
fn test_for_without_clauses() {
    let node = make_for(None, None, None, Some(make_empty()));
    let out = render_ast(Some(&node), 0);
    assert_eq!(out, "For\n  Body:\n    Empty\n");
    assert!(!out.contains("Init:"));
    assert!(!out.contains("Cond:"));
    assert!(!out.contains("Incr:"));
}

#[test]
fn test_for_absent_body_differs_from_empty_block() {
    let absent = make_for(None, None, None, None);
    let empty_block = make_for(None, None, None, Some(make_block(None)));
    assert_eq!(render_ast(Some(&absent), 0), "For\n");
    assert_eq!(render_ast(Some(&empty_block), 0), "For\n  Body:\n    Block\n");
}

#[test]
fn test_variable_declaration() {
    let bare = make_variable_declaration(int_type(), "x", None);
    assert_eq!(render_ast(Some(&bare), 0), "VarDecl: x\n  Type: int\n");

    let init = make_variable_declaration(int_type(), "y", Some(make_int_literal(5)));
    assert_eq!(
        render_ast(Some(&init), 0),
        "VarDecl: y\n  Type: int\n  Initializer:\n    Int: 5\n"
    );
}

#[test]
fn test_literals_are_escaped() {
    assert_eq!(render_ast(Some(&make_char_literal('a')), 0), "Char: 'a'\n");
    assert_eq!(render_ast(Some(&make_char_literal('\n')), 0), "Char: '\\n'\n");
    assert_eq!(
        render_ast(Some(&make_string_literal("say \"hi\"\n")), 0),
        "String: \"say \\\"hi\\\"\\n\"\n"
    );
}

#[test]
fn test_non_ascii_literals_escape_alike() {
    assert_eq!(render_ast(Some(&make_char_literal('é')), 0), "Char: 'é'\n");
    assert_eq!(render_ast(Some(&make_string_literal("é")), 0), "String: \"é\"\n");
    assert_eq!(render_ast(Some(&make_char_literal('\t')), 0), "Char: '\\t'\n");
}

#[test]
fn test_function_call_arguments() {
    let mut args = append_sibling(None, make_int_literal(1));
    args.append(make_variable("y"));
    let node = make_function_call("max", Some(args));
    assert_eq!(
        render_ast(Some(&node), 0),
        "Call: max\n  Args:\n    Int: 1\n    Var: y\n"
    );
    let bare = make_function_call("tick", None);
    assert_eq!(render_ast(Some(&bare), 0), "Call: tick\n  Args:\n");
}

#[test]
fn test_return_without_value() {
    assert_eq!(render_ast(Some(&make_return(None)), 1), "  Return\n");
}

#[test]
fn test_every_kind_has_its_label() {
    let nodes = vec![
        make_function_definition(int_type(), "f", None, None),
        make_variable_declaration(int_type(), "v", None),
        make_parameter(int_type(), "p"),
        make_block(None),
        make_if(make_variable("c"), make_empty(), None),
        make_while(make_variable("c"), make_empty()),
        make_for(None, None, None, None),
        make_return(None),
        make_assign(make_variable("a"), make_int_literal(1)),
        make_binary_op(BinaryOperator::Sub, make_int_literal(1), make_int_literal(1)),
        make_unary_op(UnaryOperator::LogicalNot, make_int_literal(0)),
        make_int_literal(3),
        make_char_literal('z'),
        make_string_literal("s"),
        make_variable("v"),
        make_function_call("g", None),
        make_type_ref(PrimitiveType::Char),
        make_empty(),
    ];
    let kinds: Vec<NodeKind> = nodes.iter().map(|n| n.kind()).collect();
    assert_eq!(kinds, NodeKind::ALL.to_vec());

    for node in &nodes {
        let out = render_ast(Some(node), 0);
        let first = out.lines().next().unwrap_or_default();
        assert!(
            first.starts_with(node.kind().name()),
            "label line '{}' does not name {:?}",
            first,
            node.kind()
        );
    }
}

#[test]
fn test_write_ast_to_writer() -> AstResult<()> {
    let node = make_binary_op(BinaryOperator::Equal, make_variable("a"), make_variable("b"));
    let mut out: Vec<u8> = Vec::new();
    write_ast(&mut out, Some(&node), 0)?;
    assert_eq!(String::from_utf8_lossy(&out), "BinOp: ==\n  Var: a\n  Var: b\n");
    Ok(())
}

#[test]
fn test_display_matches_render() {
    let node = make_return(Some(make_int_literal(9)));
    assert_eq!(node.to_string(), render_ast(Some(&node), 0));
}

#[test]
fn test_rendering_is_stable() {
    let node = make_while(
        make_binary_op(BinaryOperator::Greater, make_variable("n"), make_int_literal(0)),
        make_assign(
            make_variable("n"),
            make_binary_op(BinaryOperator::Sub, make_variable("n"), make_int_literal(1)),
        ),
    );
    assert_eq!(render_ast(Some(&node), 0), render_ast(Some(&node), 0));
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_failure_is_reported() {
    let node = make_int_literal(1);
    match write_ast(&mut ClosedPipe, Some(&node), 0) {
        Err(AstError::IoError(err)) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("unexpected result {:?}", other),
    }

    let list = NodeList::from(make_empty());
    assert!(matches!(
        write_list(&mut ClosedPipe, &list, 0),
        Err(AstError::IoError(_))
    ));
}

#[test]
fn test_absent_node_never_touches_writer() -> AstResult<()> {
    write_ast(&mut ClosedPipe, None, 0)?;
    write_list(&mut ClosedPipe, &NodeList::new(), 3)?;
    Ok(())
}
