//! Renders an AST back to GraphQL source text.
//!
//! Output is canonical rather than layout-preserving:
//!
//! - definitions are separated by one blank line
//! - selection sets, field lists and enum values are indented two spaces
//!   per level
//! - anonymous, variable-free, directive-free queries use the `{ ... }`
//!   shorthand, unless they follow a type system definition
//! - strings are re-escaped and block strings are emitted so that lexing
//!   them again reproduces their content exactly
//!
//! For any document `doc` produced by the parser,
//! `parse(&print_document(&doc)) == Ok(doc)`.

use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::Document;
use crate::ast::EnumValueDefinition;
use crate::ast::ExecutableDefinition;
use crate::ast::FieldDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::IndexedList;
use crate::ast::InputValueDefinition;
use crate::ast::OperationDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::TypeAnnotation;
use crate::ast::TypeDefinition;
use crate::ast::TypeSystemDefinition;
use crate::ast::TypeSystemExtension;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use inherent::inherent;

const INDENT: &str = "  ";

/// Renders `document` as GraphQL source text, ending with a newline.
pub fn print_document(document: &Document<'_>) -> String {
    document.to_source()
}

// =============================================================================
// AstNode implementations
// =============================================================================

#[inherent]
impl AstNode for Document<'_> {
    pub fn to_source(&self) -> String;

    pub fn append_source(&self, sink: &mut String) {
        let mut printer = Printer::new(sink);
        for (i, def) in self.definitions.iter().enumerate() {
            if i > 0 {
                printer.sink.push_str("\n\n");
            }
            printer.definition(def);
            // A leading `{` would be read as the field list of a preceding
            // type system definition that has none.
            printer.allow_shorthand = matches!(def, Definition::Executable(_));
        }
        if !self.definitions.is_empty() {
            printer.sink.push('\n');
        }
    }
}

#[inherent]
impl AstNode for Definition<'_> {
    pub fn to_source(&self) -> String;

    pub fn append_source(&self, sink: &mut String) {
        Printer::new(sink).definition(self);
    }
}

#[inherent]
impl AstNode for Value<'_> {
    pub fn to_source(&self) -> String;

    pub fn append_source(&self, sink: &mut String) {
        Printer::new(sink).value(self);
    }
}

#[inherent]
impl AstNode for TypeAnnotation<'_> {
    pub fn to_source(&self) -> String;

    pub fn append_source(&self, sink: &mut String) {
        Printer::new(sink).type_annotation(self);
    }
}

#[inherent]
impl AstNode for Directive<'_> {
    pub fn to_source(&self) -> String;

    pub fn append_source(&self, sink: &mut String) {
        Printer::new(sink).directive(self);
    }
}

// =============================================================================
// Printer
// =============================================================================

struct Printer<'a> {
    sink: &'a mut String,
    depth: usize,
    allow_shorthand: bool,
}

impl<'a> Printer<'a> {
    fn new(sink: &'a mut String) -> Self {
        Self {
            sink,
            depth: 0,
            allow_shorthand: true,
        }
    }

    fn push(&mut self, s: &str) {
        self.sink.push_str(s);
    }

    fn newline(&mut self) {
        self.sink.push('\n');
        for _ in 0..self.depth {
            self.sink.push_str(INDENT);
        }
    }

    /// Prints `{`, then each item on its own indented line, then `}`.
    fn block<T>(&mut self, items: &IndexedList<T>, mut print_item: impl FnMut(&mut Self, &T)) {
        self.push("{");
        self.depth += 1;
        for item in items {
            self.newline();
            print_item(self, item);
        }
        self.depth -= 1;
        self.newline();
        self.push("}");
    }

    /// Prints `items` separated by `separator`.
    fn joined<T>(
        &mut self,
        items: &IndexedList<T>,
        separator: &str,
        mut print_item: impl FnMut(&mut Self, &T),
    ) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.push(separator);
            }
            print_item(self, item);
        }
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn definition(&mut self, def: &Definition<'_>) {
        match def {
            Definition::Executable(ExecutableDefinition::Operation(op)) => self.operation(op),
            Definition::Executable(ExecutableDefinition::Fragment(frag)) => self.fragment(frag),
            Definition::TypeSystem(TypeSystemDefinition::Schema(schema)) => {
                self.schema(schema, false)
            },
            Definition::TypeSystem(TypeSystemDefinition::Type(type_def)) => {
                self.type_definition(type_def)
            },
            Definition::TypeSystem(TypeSystemDefinition::Directive(directive_def)) => {
                self.directive_definition(directive_def)
            },
            Definition::TypeSystemExtension(TypeSystemExtension::Schema(schema)) => {
                self.push("extend ");
                self.schema(schema, true);
            },
            Definition::TypeSystemExtension(TypeSystemExtension::Type(type_def)) => {
                self.push("extend ");
                self.type_definition(type_def);
            },
        }
    }

    fn operation(&mut self, op: &OperationDefinition<'_>) {
        if !(op.is_shorthand() && self.allow_shorthand) {
            self.push(op.operation_type.as_str());
            if let Some(name) = &op.name {
                self.push(" ");
                self.push(name);
            }
            self.variable_definitions(&op.variable_definitions);
            self.directives(&op.directives);
            self.push(" ");
        }
        self.selection_set(&op.selection_set);
    }

    fn fragment(&mut self, frag: &FragmentDefinition<'_>) {
        self.push("fragment ");
        self.push(&frag.name);
        self.push(" on ");
        self.push(&frag.type_condition);
        self.directives(&frag.directives);
        self.push(" ");
        self.selection_set(&frag.selection_set);
    }

    fn variable_definitions(&mut self, var_defs: &IndexedList<VariableDefinition<'_>>) {
        if var_defs.is_empty() {
            return;
        }
        self.push("(");
        self.joined(var_defs, ", ", |p, var_def| {
            p.push("$");
            p.push(&var_def.name);
            p.push(": ");
            p.type_annotation(&var_def.var_type);
            if let Some(default_value) = &var_def.default_value {
                p.push(" = ");
                p.value(default_value);
            }
            p.directives(&var_def.directives);
        });
        self.push(")");
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn selection_set(&mut self, selection_set: &SelectionSet<'_>) {
        self.block(selection_set, Self::selection);
    }

    fn selection(&mut self, selection: &Selection<'_>) {
        match selection {
            Selection::Field(field) => {
                if let Some(alias) = &field.alias {
                    self.push(alias);
                    self.push(": ");
                }
                self.push(&field.name);
                self.arguments(&field.arguments);
                self.directives(&field.directives);
                if let Some(selection_set) = &field.selection_set {
                    self.push(" ");
                    self.selection_set(selection_set);
                }
            },
            Selection::FragmentSpread(spread) => {
                self.push("...");
                self.push(&spread.name);
                self.directives(&spread.directives);
            },
            Selection::InlineFragment(inline) => {
                self.push("...");
                if let Some(type_condition) = &inline.type_condition {
                    self.push(" on ");
                    self.push(type_condition);
                }
                self.directives(&inline.directives);
                self.push(" ");
                self.selection_set(&inline.selection_set);
            },
        }
    }

    fn arguments(&mut self, arguments: &IndexedList<Argument<'_>>) {
        if arguments.is_empty() {
            return;
        }
        self.push("(");
        self.joined(arguments, ", ", |p, arg| {
            p.push(&arg.name);
            p.push(": ");
            p.value(&arg.value);
        });
        self.push(")");
    }

    fn directives(&mut self, directives: &IndexedList<Directive<'_>>) {
        for directive in directives {
            self.push(" ");
            self.directive(directive);
        }
    }

    fn directive(&mut self, directive: &Directive<'_>) {
        self.push("@");
        self.push(&directive.name);
        self.arguments(&directive.arguments);
    }

    // =========================================================================
    // Values and types
    // =========================================================================

    fn value(&mut self, value: &Value<'_>) {
        match value {
            Value::Variable(name) => {
                self.push("$");
                self.push(name);
            },
            Value::Int(raw) | Value::Float(raw) | Value::Enum(raw) => self.push(raw),
            Value::String(string) => self.string(string),
            Value::Boolean(true) => self.push("true"),
            Value::Boolean(false) => self.push("false"),
            Value::Null => self.push("null"),
            Value::List(items) => {
                self.push("[");
                self.joined(items, ", ", Self::value);
                self.push("]");
            },
            Value::Object(fields) => {
                self.push("{");
                self.joined(fields, ", ", |p, field| {
                    p.push(&field.name);
                    p.push(": ");
                    p.value(&field.value);
                });
                self.push("}");
            },
        }
    }

    fn type_annotation(&mut self, annot: &TypeAnnotation<'_>) {
        match annot {
            TypeAnnotation::Named(named) => self.push(&named.name),
            TypeAnnotation::List(list) => {
                self.push("[");
                self.type_annotation(&list.element_type);
                self.push("]");
            },
        }
        if annot.nullability().is_non_null() {
            self.push("!");
        }
    }

    fn string(&mut self, string: &StringValue<'_>) {
        if string.is_block && is_block_printable(&string.value) {
            self.push("\"\"\"\n");
            self.push(&string.value.replace("\"\"\"", "\\\"\"\""));
            // The lexer strips one trailing `\n` and then one `\r`, so a
            // trailing `\r` in the content needs its own `\r\n` after it.
            self.push(if string.value.ends_with('\r') { "\r\n" } else { "\n" });
            self.push("\"\"\"");
        } else {
            self.push("\"");
            escape_string_into(&string.value, self.sink);
            self.push("\"");
        }
    }

    /// Prints a description followed by either a line break (for block-level
    /// definitions) or a space (for inline argument definitions).
    fn description(&mut self, description: Option<&StringValue<'_>>, inline: bool) {
        if let Some(description) = description {
            self.string(description);
            if inline {
                self.push(" ");
            } else {
                self.newline();
            }
        }
    }

    // =========================================================================
    // Type system
    // =========================================================================

    fn schema(&mut self, schema: &SchemaDefinition<'_>, is_extension: bool) {
        self.description(schema.description.as_ref(), false);
        self.push("schema");
        self.directives(&schema.directives);
        if !is_extension || !schema.root_operation_types.is_empty() {
            self.push(" ");
            self.block(&schema.root_operation_types, |p, root| {
                p.push(root.operation_type.as_str());
                p.push(": ");
                p.push(&root.named_type);
            });
        }
    }

    fn type_definition(&mut self, type_def: &TypeDefinition<'_>) {
        self.description(type_def.description(), false);
        self.push(type_def.kind().keyword());
        self.push(" ");
        self.push(type_def.name());

        match type_def {
            TypeDefinition::Scalar(scalar) => self.directives(&scalar.directives),
            TypeDefinition::Object(object) => {
                self.implements(&object.interfaces);
                self.directives(&object.directives);
                self.field_definitions(&object.fields);
            },
            TypeDefinition::Interface(interface) => {
                self.implements(&interface.interfaces);
                self.directives(&interface.directives);
                self.field_definitions(&interface.fields);
            },
            TypeDefinition::Union(union) => {
                self.directives(&union.directives);
                if !union.members.is_empty() {
                    self.push(" = ");
                    self.joined(&union.members, " | ", Self::type_annotation);
                }
            },
            TypeDefinition::Enum(enum_def) => {
                self.directives(&enum_def.directives);
                if !enum_def.values.is_empty() {
                    self.push(" ");
                    self.block(&enum_def.values, Self::enum_value_definition);
                }
            },
            TypeDefinition::InputObject(input) => {
                self.directives(&input.directives);
                if !input.fields.is_empty() {
                    self.push(" ");
                    self.block(&input.fields, |p, field| p.input_value_definition(field, false));
                }
            },
        }
    }

    fn implements(&mut self, interfaces: &IndexedList<TypeAnnotation<'_>>) {
        if !interfaces.is_empty() {
            self.push(" implements ");
            self.joined(interfaces, " & ", Self::type_annotation);
        }
    }

    fn field_definitions(&mut self, fields: &IndexedList<FieldDefinition<'_>>) {
        if fields.is_empty() {
            return;
        }
        self.push(" ");
        self.block(fields, |p, field| {
            p.description(field.description.as_ref(), false);
            p.push(&field.name);
            p.argument_definitions(&field.arguments);
            p.push(": ");
            p.type_annotation(&field.field_type);
            p.directives(&field.directives);
        });
    }

    fn argument_definitions(&mut self, arguments: &IndexedList<InputValueDefinition<'_>>) {
        if arguments.is_empty() {
            return;
        }
        self.push("(");
        self.joined(arguments, ", ", |p, arg| p.input_value_definition(arg, true));
        self.push(")");
    }

    fn input_value_definition(&mut self, input_value: &InputValueDefinition<'_>, inline: bool) {
        self.description(input_value.description.as_ref(), inline);
        self.push(&input_value.name);
        self.push(": ");
        self.type_annotation(&input_value.value_type);
        if let Some(default_value) = &input_value.default_value {
            self.push(" = ");
            self.value(default_value);
        }
        self.directives(&input_value.directives);
    }

    fn enum_value_definition(&mut self, enum_value: &EnumValueDefinition<'_>) {
        self.description(enum_value.description.as_ref(), false);
        self.push(&enum_value.name);
        self.directives(&enum_value.directives);
    }

    fn directive_definition(&mut self, directive_def: &DirectiveDefinition<'_>) {
        self.description(directive_def.description.as_ref(), false);
        self.push("directive @");
        self.push(&directive_def.name);
        self.argument_definitions(&directive_def.arguments);
        if directive_def.repeatable {
            self.push(" repeatable");
        }
        self.push(" on ");
        self.joined(&directive_def.locations, " | ", |p, location| p.push(location.as_str()));
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Block strings cannot represent control characters other than tab and line
/// terminators, so content containing any is printed as a regular string.
fn is_block_printable(content: &str) -> bool {
    !content.chars().any(|ch| ch < ' ' && !matches!(ch, '\t' | '\n' | '\r'))
}

fn escape_string_into(value: &str, sink: &mut String) {
    for ch in value.chars() {
        match ch {
            '"' => sink.push_str("\\\""),
            '\\' => sink.push_str("\\\\"),
            '\n' => sink.push_str("\\n"),
            '\r' => sink.push_str("\\r"),
            '\t' => sink.push_str("\\t"),
            '\u{0008}' => sink.push_str("\\b"),
            '\u{000C}' => sink.push_str("\\f"),
            ch if ch < ' ' => sink.push_str(&format!("\\u{:04X}", ch as u32)),
            ch => sink.push(ch),
        }
    }
}
