use std::fmt::Write;

/// A query whose selection sets nest `depth` levels below the operation.
///
/// Every level is an aliased `child` field with one argument, so the parser
/// exercises arguments and aliases on the way down. `depth` must stay within
/// the parser's nesting limit.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::from("query DeeplyNested ");
    for level in 0..depth {
        write!(out, "{{ id c{level}: child(level: {level}) ").unwrap();
    }
    out.push_str("{ name }");
    out.push_str(&" }".repeat(depth));
    out.push('\n');
    out
}

/// `count` named queries sharing one fragment, each with variables, a
/// directive and an inline fragment.
pub fn many_operations(count: usize) -> String {
    let mut out = String::from("fragment NodeFields on Node { id ... on Named { name } }\n\n");
    for i in 0..count {
        write!(
            out,
            "query Operation{i}($id: ID!, $skip: Boolean = false) {{\n  \
               node(id: $id) {{\n    \
                 ...NodeFields\n    \
                 field{i}: description @skip(if: $skip)\n  \
               }}\n\
             }}\n\n",
        )
        .unwrap();
    }
    out
}
