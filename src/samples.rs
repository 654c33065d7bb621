// Ready-made trees for the demo driver, built the way a parser would:
// children first, sequences threaded with append_sibling.

use crate::ast::*;
use crate::errors::{AstError, AstResult};

pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> NodeList,
}

impl Sample {
    pub fn build(&self) -> NodeList {
        (self.build)()
    }
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "literal",
        description: "a single integer literal",
        build: literal,
    },
    Sample {
        name: "binop",
        description: "the expression 1 + 2",
        build: binop,
    },
    Sample {
        name: "siblings",
        description: "three literals threaded into one sequence",
        build: siblings,
    },
    Sample {
        name: "if",
        description: "an if statement without else",
        build: if_without_else,
    },
    Sample {
        name: "main",
        description: "int main() { return 0; }",
        build: main_function,
    },
    Sample {
        name: "loops",
        description: "while and for loops, including for(;;)",
        build: loops,
    },
    Sample {
        name: "factorial",
        description: "recursive factorial with a prototype and a caller",
        build: factorial,
    },
];

pub fn find_sample(name: &str) -> AstResult<&'static Sample> {
    SAMPLES
        .iter()
        .find(|sample| sample.name == name)
        .ok_or_else(|| AstError::UnknownSample(name.to_string()))
}

fn int_type() -> Node {
    make_type_ref(PrimitiveType::Int)
}

fn literal() -> NodeList {
    NodeList::from(make_int_literal(42))
}

fn binop() -> NodeList {
    NodeList::from(make_binary_op(
        BinaryOperator::Add,
        make_int_literal(1),
        make_int_literal(2),
    ))
}

fn siblings() -> NodeList {
    let head = append_sibling(None, make_int_literal(1));
    let head = append_sibling(Some(head), make_int_literal(2));
    append_sibling(Some(head), make_int_literal(3))
}

fn if_without_else() -> NodeList {
    let cond = make_binary_op(BinaryOperator::Less, make_variable("x"), make_int_literal(10));
    let then = make_assign(
        make_variable("x"),
        make_binary_op(BinaryOperator::Add, make_variable("x"), make_int_literal(1)),
    );
    NodeList::from(make_if(cond, then, None))
}

fn main_function() -> NodeList {
    let body = make_block(Some(NodeList::from(make_return(Some(make_int_literal(0))))));
    NodeList::from(make_function_definition(int_type(), "main", None, Some(body)))
}

fn loops() -> NodeList {
    // int i = 0; while (i < 3) i = i + 1;
    let decl = make_variable_declaration(int_type(), "i", Some(make_int_literal(0)));
    let while_loop = make_while(
        make_binary_op(BinaryOperator::Less, make_variable("i"), make_int_literal(3)),
        make_assign(
            make_variable("i"),
            make_binary_op(BinaryOperator::Add, make_variable("i"), make_int_literal(1)),
        ),
    );

    // for (i = 0; i != 10; i = i + 1) putchar('*');
    let counted = make_for(
        Some(make_assign(make_variable("i"), make_int_literal(0))),
        Some(make_binary_op(
            BinaryOperator::NotEqual,
            make_variable("i"),
            make_int_literal(10),
        )),
        Some(make_assign(
            make_variable("i"),
            make_binary_op(BinaryOperator::Add, make_variable("i"), make_int_literal(1)),
        )),
        Some(make_function_call(
            "putchar",
            Some(NodeList::from(make_char_literal('*'))),
        )),
    );

    // for (;;);
    let forever = make_for(None, None, None, Some(make_empty()));

    let mut stmts = append_sibling(None, decl);
    stmts.append(while_loop);
    stmts.append(counted);
    stmts.append(forever);
    NodeList::from(make_block(Some(stmts)))
}

fn factorial() -> NodeList {
    let printf_params = NodeList::from(make_parameter(
        make_type_ref(PrimitiveType::Char),
        "format",
    ));
    let prototype = make_function_definition(int_type(), "printf", Some(printf_params), None);

    // if (n <= 1) return 1; else return n * fact(n - 1);
    let recurse = make_function_call(
        "fact",
        Some(NodeList::from(make_binary_op(
            BinaryOperator::Sub,
            make_variable("n"),
            make_int_literal(1),
        ))),
    );
    let branch = make_if(
        make_binary_op(BinaryOperator::LessEqual, make_variable("n"), make_int_literal(1)),
        make_return(Some(make_int_literal(1))),
        Some(make_return(Some(make_binary_op(
            BinaryOperator::Mul,
            make_variable("n"),
            recurse,
        )))),
    );
    let fact = make_function_definition(
        int_type(),
        "fact",
        Some(NodeList::from(make_parameter(int_type(), "n"))),
        Some(make_block(Some(NodeList::from(branch)))),
    );

    // printf("%d\n", fact(5)); return 0;
    let mut args = append_sibling(None, make_string_literal("%d\n"));
    args.append(make_function_call(
        "fact",
        Some(NodeList::from(make_int_literal(5))),
    ));
    let mut body = append_sibling(None, make_function_call("printf", Some(args)));
    body.append(make_return(Some(make_int_literal(0))));
    let main = make_function_definition(
        int_type(),
        "main",
        None,
        Some(make_block(Some(body))),
    );

    let program = append_sibling(None, prototype);
    let program = append_sibling(Some(program), fact);
    append_sibling(Some(program), main)
}
