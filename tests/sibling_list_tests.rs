use minic::ast::*;

#[test]
fn test_three_siblings_render_in_order() {
    let head = NodeList::from(make_int_literal(1));
    let head = append_sibling(Some(head), make_int_literal(2));
    let head = append_sibling(Some(head), make_int_literal(3));
    assert_eq!(render_list(&head, 0), "Int: 1\nInt: 2\nInt: 3\n");
}

#[test]
fn test_siblings_share_indentation() {
    let mut list = NodeList::new();
    for value in 0..5 {
        list = append_sibling(Some(list), make_int_literal(value));
    }
    let out = render_list(&list, 1);
    assert_eq!(out.lines().count(), 5);
    for (i, line) in out.lines().enumerate() {
        assert_eq!(line, format!("  Int: {}", i));
    }
}

#[test]
fn test_absent_head_starts_a_sequence() {
    let list = append_sibling(None, make_variable("x"));
    assert_eq!(list.len(), 1);
    assert_eq!(list.first(), Some(&make_variable("x")));
}

#[test]
fn test_append_keeps_existing_nodes() {
    let mut list = append_sibling(None, make_int_literal(10));
    list.append(make_int_literal(20));
    list.append(make_int_literal(30));
    assert_eq!(list.len(), 3);
    assert_eq!(list.first(), Some(&make_int_literal(10)));
    assert_eq!(list.get(1), Some(&make_int_literal(20)));
    assert_eq!(list.last(), Some(&make_int_literal(30)));
}

#[test]
fn test_sibling_subtrees_render_flat() {
    let mut list = append_sibling(
        None,
        make_binary_op(BinaryOperator::Add, make_int_literal(1), make_int_literal(2)),
    );
    list.append(make_variable("y"));
    assert_eq!(
        render_list(&list, 0),
        "BinOp: +\n  Int: 1\n  Int: 2\nVar: y\n"
    );
}

#[test]
fn test_block_statements_use_sequence() {
    let stmts: NodeList = vec![make_empty(), make_return(None)].into_iter().collect();
    let block = make_block(Some(stmts));
    assert_eq!(render_ast(Some(&block), 0), "Block\n  Empty\n  Return\n");
}

#[test]
fn test_empty_list_renders_nothing() {
    let list = NodeList::new();
    assert!(list.is_empty());
    assert_eq!(render_list(&list, 0), "");
}

#[test]
fn test_long_argument_list() {
    let mut args = NodeList::new();
    for value in 0..1000 {
        args.append(make_int_literal(value));
    }
    let call = make_function_call("sum", Some(args));
    assert_eq!(call.count(), 1001);
    if let Node::FunctionCall { args, .. } = &call {
        let values: Vec<i32> = args
            .iter()
            .filter_map(|n| match n {
                Node::IntLiteral(v) => Some(*v),
                _ => None,
            })
            .collect();
        assert_eq!(values, (0..1000).collect::<Vec<i32>>());
    } else {
        panic!("expected a call node");
    }
}
