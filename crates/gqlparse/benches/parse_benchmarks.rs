mod fixtures;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use gqlparse::Parser;
use gqlparse::print_document;
use gqlparse::token_source::Lexer;

fn parse(source: &str) -> Result<gqlparse::ast::Document<'_>, gqlparse::SyntaxError> {
    Parser::new(source).parse_document()
}

// ─── Group 1: Schema Parsing ─────────────────────────────

fn schema_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_parse");

    group.bench_function("small", |b| {
        b.iter(|| black_box(parse(fixtures::SMALL_SCHEMA)))
    });

    for type_count in [10, 100, 1000] {
        let schema = fixtures::schemas::synthetic_schema(type_count, 12);
        group.throughput(Throughput::Bytes(schema.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("synthetic", type_count),
            &schema,
            |b, schema| {
                b.iter(|| black_box(parse(schema)))
            },
        );
    }

    group.finish();
}

// ─── Group 2: Executable Document Parsing ─────────────────

fn executable_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("executable_parse");

    group.bench_function("simple_query", |b| {
        b.iter(|| black_box(parse(fixtures::SIMPLE_QUERY)))
    });

    group.bench_function("complex_query", |b| {
        b.iter(|| black_box(parse(fixtures::COMPLEX_QUERY)))
    });

    for depth in [10, 30, 60] {
        let nested = fixtures::operations::deeply_nested_query(depth);
        group.bench_with_input(
            BenchmarkId::new("nested_depth", depth),
            &nested,
            |b, nested| {
                b.iter(|| black_box(parse(nested)))
            },
        );
    }

    let many_ops = fixtures::operations::many_operations(50);
    group.bench_function("many_operations_50", |b| {
        b.iter(|| black_box(parse(&many_ops)))
    });

    group.finish();
}

// ─── Group 3: Lexer (Tokenization Only) ──────────────────

fn lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let large_schema = fixtures::schemas::synthetic_schema(1000, 12);
    let inputs: &[(&str, &str)] = &[
        ("small_schema", fixtures::SMALL_SCHEMA),
        ("complex_query", fixtures::COMPLEX_QUERY),
        ("synthetic_schema_1000", large_schema.as_str()),
    ];

    for &(label, input) in inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(label), &input, |b, input| {
            b.iter(|| {
                for token in Lexer::new(input) {
                    black_box(token);
                }
            })
        });
    }

    group.finish();
}

// ─── Group 4: Printing ───────────────────────────────────

fn print(c: &mut Criterion) {
    let mut group = c.benchmark_group("print");

    let inputs: &[(&str, &str)] = &[
        ("small_schema", fixtures::SMALL_SCHEMA),
        ("complex_query", fixtures::COMPLEX_QUERY),
    ];

    for &(label, input) in inputs {
        let doc = parse(input).expect("fixture should parse");
        group.bench_with_input(BenchmarkId::from_parameter(label), &doc, |b, doc| {
            b.iter(|| black_box(print_document(doc)))
        });
    }

    group.finish();
}

// ─── Group 5: Cross-Parser Comparisons ───────────────────

fn compare_schema_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_schema_parse");

    for type_count in [10, 100, 1000] {
        let schema = fixtures::schemas::synthetic_schema(type_count, 12);

        group.bench_with_input(
            BenchmarkId::new("gqlparse", type_count),
            &schema,
            |b, schema| {
                b.iter(|| black_box(parse(schema)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("graphql_parser", type_count),
            &schema,
            |b, schema| {
                b.iter(|| {
                    black_box(graphql_parser::schema::parse_schema::<String>(schema))
                })
            },
        );
    }

    group.finish();
}

fn compare_executable_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_executable_parse");

    let many_ops = fixtures::operations::many_operations(50);
    let inputs: &[(&str, &str)] = &[
        ("simple", fixtures::SIMPLE_QUERY),
        ("many_operations_50", many_ops.as_str()),
    ];

    for &(label, input) in inputs {
        group.bench_with_input(BenchmarkId::new("gqlparse", label), &input, |b, input| {
            b.iter(|| black_box(parse(input)))
        });

        group.bench_with_input(
            BenchmarkId::new("graphql_parser", label),
            &input,
            |b, input| {
                b.iter(|| black_box(graphql_parser::query::parse_query::<String>(input)))
            },
        );
    }

    group.finish();
}

// ─── Criterion Entrypoint ────────────────────────────────

criterion_group!(
    benches,
    schema_parse,
    executable_parse,
    lexer,
    print,
    compare_schema_parse,
    compare_executable_parse,
);
criterion_main!(benches);
