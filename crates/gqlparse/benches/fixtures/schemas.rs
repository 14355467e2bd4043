use std::fmt::Write;

/// Generates a schema of `type_count` object types, each with
/// `fields_per_type` fields, plus an enum and an input type per ten
/// objects.
///
/// Field types reference earlier types so the document looks like a real
/// schema graph rather than a flat list of scalars.
pub fn synthetic_schema(type_count: usize, fields_per_type: usize) -> String {
    let mut out = String::with_capacity(type_count * fields_per_type * 40);
    for i in 0..type_count {
        writeln!(out, "\"\"\"\nObject type number {i}.\n\"\"\"").unwrap();
        writeln!(out, "type Type{i} implements Node @key(fields: \"id\") {{").unwrap();
        writeln!(out, "  id: ID!").unwrap();
        for f in 0..fields_per_type {
            match f % 4 {
                0 => writeln!(out, "  field{f}: String").unwrap(),
                1 => writeln!(out, "  field{f}(first: Int = 10, after: String): [Int!]!").unwrap(),
                2 => writeln!(out, "  \"Links back\" field{f}: Type{}", i / 2).unwrap(),
                _ => writeln!(out, "  field{f}: Boolean @deprecated(reason: \"old\")").unwrap(),
            }
        }
        writeln!(out, "}}\n").unwrap();

        if i % 10 == 0 {
            writeln!(out, "enum Enum{i} {{ ALPHA BETA GAMMA DELTA }}\n").unwrap();
            writeln!(out, "input Input{i} {{ a: Int = 1 b: [String!] c: Enum{i} = BETA }}\n")
                .unwrap();
        }
    }
    out
}
