//! Depth-first traversal of a [`Document`] with per-node-kind enter/leave
//! handlers.
//!
//! A [`Walker`] owns, for every node kind, an ordered list of "enter"
//! handlers and an ordered list of "leave" handlers. [`Walker::walk`] visits
//! each node by first calling its kind's enter handlers, then walking its
//! children in grammar order, then calling its kind's leave handlers.
//! Handlers run in registration order.
//!
//! Union nodes (`Definition`, `Selection`, `Value`, ...) fire their own
//! events around the events of the active variant. For a string argument
//! value the sequence is `Value` enter, `StringValue` enter, `StringValue`
//! leave, `Value` leave.
//!
//! Absent optional children (a field's selection set, a variable's default
//! value, ...) are skipped entirely. Lists are walked head-to-tail, which is
//! source order for any document produced by the parser.
//!
//! ```rust
//! use gqlparse_validation::Walker;
//!
//! let doc = gqlparse::parse("{ a b { c } }").unwrap();
//!
//! let mut walker = Walker::new(&[]);
//! walker.add_field_enter_handler(|names: &mut Vec<String>, field| {
//!     names.push(field.name.to_string());
//! });
//!
//! let mut names = vec![];
//! walker.walk(&mut names, &doc);
//! assert_eq!(names, vec!["a", "b", "c"]);
//! ```

use gqlparse::ast;
use gqlparse::ast::Definition;
use gqlparse::ast::Directive;
use gqlparse::ast::Document;
use gqlparse::ast::ExecutableDefinition;
use gqlparse::ast::IndexedList;
use gqlparse::ast::OperationType;
use gqlparse::ast::Selection;
use gqlparse::ast::TypeAnnotation;
use gqlparse::ast::TypeDefinition;
use gqlparse::ast::TypeSystemDefinition;
use gqlparse::ast::TypeSystemExtension;
use gqlparse::ast::Value;
use gqlparse::ast::ValueKind;

/// A registration function applied by [`Walker::new`].
///
/// It must accept a walker of any handler lifetime, which is what a plain
/// `fn register(walker: &mut Walker<'_, C>)` item does.
pub type VisitFn<C> = for<'w> fn(&mut Walker<'w, C>);

type Handler<'a, C, N> = Box<dyn FnMut(&mut C, &N) + 'a>;

struct Handlers<H> {
    enter: Vec<H>,
    leave: Vec<H>,
}

impl<H> Default for Handlers<H> {
    fn default() -> Self {
        Self {
            enter: vec![],
            leave: vec![],
        }
    }
}

/// Calls every handler in `$handlers` with `$ctx` and `$node`.
macro_rules! fire {
    ($handlers:expr, $ctx:expr, $node:expr) => {
        for handler in $handlers.iter_mut() {
            handler(&mut *$ctx, $node);
        }
    };
}

macro_rules! define_walker {
    ($(
        $label:literal, $field:ident: $node:ident => $add_enter:ident, $add_leave:ident;
    )*) => {
        /// Holds enter and leave handlers for every AST node kind.
        ///
        /// `C` is the caller's context type, passed mutably to every handler.
        /// `'a` bounds both the handlers and the documents they can walk.
        pub struct Walker<'a, C> {
            $( $field: Handlers<Handler<'a, C, ast::$node<'a>>>, )*
        }

        impl<'a, C> Default for Walker<'a, C> {
            fn default() -> Self {
                Self {
                    $( $field: Handlers::default(), )*
                }
            }
        }

        impl<'a, C> Walker<'a, C> {
            $(
                #[doc = concat!("Registers a handler called when entering each ", $label, ".")]
                pub fn $add_enter<F>(&mut self, handler: F)
                where
                    F: FnMut(&mut C, &ast::$node<'a>) + 'a,
                {
                    self.$field.enter.push(Box::new(handler));
                }

                #[doc = concat!("Registers a handler called when leaving each ", $label, ".")]
                pub fn $add_leave<F>(&mut self, handler: F)
                where
                    F: FnMut(&mut C, &ast::$node<'a>) + 'a,
                {
                    self.$field.leave.push(Box::new(handler));
                }
            )*
        }
    };
}

define_walker! {
    "document", document: Document
        => add_document_enter_handler, add_document_leave_handler;
    "definition", definition: Definition
        => add_definition_enter_handler, add_definition_leave_handler;
    "executable definition", executable_definition: ExecutableDefinition
        => add_executable_definition_enter_handler, add_executable_definition_leave_handler;

    "operation definition", operation_definition: OperationDefinition
        => add_operation_definition_enter_handler, add_operation_definition_leave_handler;
    "`query` operation definition", query_operation_definition: OperationDefinition
        => add_query_operation_definition_enter_handler,
           add_query_operation_definition_leave_handler;
    "`mutation` operation definition", mutation_operation_definition: OperationDefinition
        => add_mutation_operation_definition_enter_handler,
           add_mutation_operation_definition_leave_handler;
    "`subscription` operation definition",
    subscription_operation_definition: OperationDefinition
        => add_subscription_operation_definition_enter_handler,
           add_subscription_operation_definition_leave_handler;

    "fragment definition", fragment_definition: FragmentDefinition
        => add_fragment_definition_enter_handler, add_fragment_definition_leave_handler;
    "variable definition", variable_definition: VariableDefinition
        => add_variable_definition_enter_handler, add_variable_definition_leave_handler;
    "selection set", selection_set: SelectionSet
        => add_selection_set_enter_handler, add_selection_set_leave_handler;
    "selection", selection: Selection
        => add_selection_enter_handler, add_selection_leave_handler;
    "field selection", field: Field
        => add_field_enter_handler, add_field_leave_handler;
    "fragment spread", fragment_spread: FragmentSpread
        => add_fragment_spread_enter_handler, add_fragment_spread_leave_handler;
    "inline fragment", inline_fragment: InlineFragment
        => add_inline_fragment_enter_handler, add_inline_fragment_leave_handler;
    "argument", argument: Argument
        => add_argument_enter_handler, add_argument_leave_handler;
    "directive annotation", directive: Directive
        => add_directive_enter_handler, add_directive_leave_handler;
    "object value field", object_field: ObjectField
        => add_object_field_enter_handler, add_object_field_leave_handler;
    "type annotation, including nested list element types", type_annotation: TypeAnnotation
        => add_type_enter_handler, add_type_leave_handler;

    "value", value: Value
        => add_value_enter_handler, add_value_leave_handler;
    "variable value", variable_value: Value
        => add_variable_value_enter_handler, add_variable_value_leave_handler;
    "int value", int_value: Value
        => add_int_value_enter_handler, add_int_value_leave_handler;
    "float value", float_value: Value
        => add_float_value_enter_handler, add_float_value_leave_handler;
    "string value", string_value: Value
        => add_string_value_enter_handler, add_string_value_leave_handler;
    "boolean value", boolean_value: Value
        => add_boolean_value_enter_handler, add_boolean_value_leave_handler;
    "null value", null_value: Value
        => add_null_value_enter_handler, add_null_value_leave_handler;
    "enum value", enum_value: Value
        => add_enum_value_enter_handler, add_enum_value_leave_handler;
    "list value", list_value: Value
        => add_list_value_enter_handler, add_list_value_leave_handler;
    "object value", object_value: Value
        => add_object_value_enter_handler, add_object_value_leave_handler;

    "type system definition", type_system_definition: TypeSystemDefinition
        => add_type_system_definition_enter_handler,
           add_type_system_definition_leave_handler;
    "schema definition (not extension)", schema_definition: SchemaDefinition
        => add_schema_definition_enter_handler, add_schema_definition_leave_handler;
    "root operation type definition", root_operation_type_definition: RootOperationTypeDefinition
        => add_root_operation_type_definition_enter_handler,
           add_root_operation_type_definition_leave_handler;
    "type definition (not extension)", type_definition: TypeDefinition
        => add_type_definition_enter_handler, add_type_definition_leave_handler;
    "scalar type definition", scalar_type_definition: ScalarTypeDefinition
        => add_scalar_type_definition_enter_handler, add_scalar_type_definition_leave_handler;
    "object type definition", object_type_definition: ObjectTypeDefinition
        => add_object_type_definition_enter_handler, add_object_type_definition_leave_handler;
    "interface type definition", interface_type_definition: InterfaceTypeDefinition
        => add_interface_type_definition_enter_handler,
           add_interface_type_definition_leave_handler;
    "union type definition", union_type_definition: UnionTypeDefinition
        => add_union_type_definition_enter_handler, add_union_type_definition_leave_handler;
    "enum type definition", enum_type_definition: EnumTypeDefinition
        => add_enum_type_definition_enter_handler, add_enum_type_definition_leave_handler;
    "input object type definition", input_object_type_definition: InputObjectTypeDefinition
        => add_input_object_type_definition_enter_handler,
           add_input_object_type_definition_leave_handler;
    "field definition", field_definition: FieldDefinition
        => add_field_definition_enter_handler, add_field_definition_leave_handler;
    "argument definition or input object field", input_value_definition: InputValueDefinition
        => add_input_value_definition_enter_handler, add_input_value_definition_leave_handler;
    "enum value definition", enum_value_definition: EnumValueDefinition
        => add_enum_value_definition_enter_handler, add_enum_value_definition_leave_handler;
    "directive definition", directive_definition: DirectiveDefinition
        => add_directive_definition_enter_handler, add_directive_definition_leave_handler;

    "type system extension", type_system_extension: TypeSystemExtension
        => add_type_system_extension_enter_handler,
           add_type_system_extension_leave_handler;
    "schema extension", schema_extension: SchemaDefinition
        => add_schema_extension_enter_handler, add_schema_extension_leave_handler;
    "type extension", type_extension: TypeDefinition
        => add_type_extension_enter_handler, add_type_extension_leave_handler;
}

impl<'a, C> Walker<'a, C> {
    /// Creates a walker and applies each registration function to it, in
    /// order.
    pub fn new(visit_fns: &[VisitFn<C>]) -> Self {
        let mut walker = Self::default();
        for visit_fn in visit_fns {
            visit_fn(&mut walker);
        }
        walker
    }

    /// Walks `document` depth-first, calling registered handlers with `ctx`.
    pub fn walk(&mut self, ctx: &mut C, document: &Document<'a>) {
        fire!(self.document.enter, ctx, document);
        for definition in &document.definitions {
            self.walk_definition(ctx, definition);
        }
        fire!(self.document.leave, ctx, document);
    }

    fn walk_definition(&mut self, ctx: &mut C, definition: &Definition<'a>) {
        fire!(self.definition.enter, ctx, definition);
        match definition {
            Definition::Executable(executable) => {
                self.walk_executable_definition(ctx, executable)
            },
            Definition::TypeSystem(type_system) => {
                self.walk_type_system_definition(ctx, type_system)
            },
            Definition::TypeSystemExtension(extension) => {
                self.walk_type_system_extension(ctx, extension)
            },
        }
        fire!(self.definition.leave, ctx, definition);
    }

    // =========================================================================
    // Executable definitions
    // =========================================================================

    fn walk_executable_definition(
        &mut self,
        ctx: &mut C,
        definition: &ExecutableDefinition<'a>,
    ) {
        fire!(self.executable_definition.enter, ctx, definition);
        match definition {
            ExecutableDefinition::Operation(op) => self.walk_operation_definition(ctx, op),
            ExecutableDefinition::Fragment(frag) => self.walk_fragment_definition(ctx, frag),
        }
        fire!(self.executable_definition.leave, ctx, definition);
    }

    fn walk_operation_definition(&mut self, ctx: &mut C, op: &ast::OperationDefinition<'a>) {
        fire!(self.operation_definition.enter, ctx, op);
        match op.operation_type {
            OperationType::Query => fire!(self.query_operation_definition.enter, ctx, op),
            OperationType::Mutation => fire!(self.mutation_operation_definition.enter, ctx, op),
            OperationType::Subscription => {
                fire!(self.subscription_operation_definition.enter, ctx, op)
            },
        }

        for var_def in &op.variable_definitions {
            self.walk_variable_definition(ctx, var_def);
        }
        self.walk_directives(ctx, &op.directives);
        self.walk_selection_set(ctx, &op.selection_set);

        match op.operation_type {
            OperationType::Query => fire!(self.query_operation_definition.leave, ctx, op),
            OperationType::Mutation => fire!(self.mutation_operation_definition.leave, ctx, op),
            OperationType::Subscription => {
                fire!(self.subscription_operation_definition.leave, ctx, op)
            },
        }
        fire!(self.operation_definition.leave, ctx, op);
    }

    fn walk_variable_definition(&mut self, ctx: &mut C, var_def: &ast::VariableDefinition<'a>) {
        fire!(self.variable_definition.enter, ctx, var_def);
        self.walk_type(ctx, &var_def.var_type);
        if let Some(default_value) = &var_def.default_value {
            self.walk_value(ctx, default_value);
        }
        self.walk_directives(ctx, &var_def.directives);
        fire!(self.variable_definition.leave, ctx, var_def);
    }

    fn walk_fragment_definition(&mut self, ctx: &mut C, frag: &ast::FragmentDefinition<'a>) {
        fire!(self.fragment_definition.enter, ctx, frag);
        self.walk_directives(ctx, &frag.directives);
        self.walk_selection_set(ctx, &frag.selection_set);
        fire!(self.fragment_definition.leave, ctx, frag);
    }

    fn walk_selection_set(&mut self, ctx: &mut C, selection_set: &ast::SelectionSet<'a>) {
        fire!(self.selection_set.enter, ctx, selection_set);
        for selection in selection_set {
            self.walk_selection(ctx, selection);
        }
        fire!(self.selection_set.leave, ctx, selection_set);
    }

    fn walk_selection(&mut self, ctx: &mut C, selection: &Selection<'a>) {
        fire!(self.selection.enter, ctx, selection);
        match selection {
            Selection::Field(field) => self.walk_field(ctx, field),
            Selection::FragmentSpread(spread) => self.walk_fragment_spread(ctx, spread),
            Selection::InlineFragment(inline) => self.walk_inline_fragment(ctx, inline),
        }
        fire!(self.selection.leave, ctx, selection);
    }

    fn walk_field(&mut self, ctx: &mut C, field: &ast::Field<'a>) {
        fire!(self.field.enter, ctx, field);
        for argument in &field.arguments {
            self.walk_argument(ctx, argument);
        }
        self.walk_directives(ctx, &field.directives);
        if let Some(selection_set) = &field.selection_set {
            self.walk_selection_set(ctx, selection_set);
        }
        fire!(self.field.leave, ctx, field);
    }

    fn walk_fragment_spread(&mut self, ctx: &mut C, spread: &ast::FragmentSpread<'a>) {
        fire!(self.fragment_spread.enter, ctx, spread);
        self.walk_directives(ctx, &spread.directives);
        fire!(self.fragment_spread.leave, ctx, spread);
    }

    fn walk_inline_fragment(&mut self, ctx: &mut C, inline: &ast::InlineFragment<'a>) {
        fire!(self.inline_fragment.enter, ctx, inline);
        self.walk_directives(ctx, &inline.directives);
        self.walk_selection_set(ctx, &inline.selection_set);
        fire!(self.inline_fragment.leave, ctx, inline);
    }

    // =========================================================================
    // Shared leaves: arguments, directives, values and types
    // =========================================================================

    fn walk_argument(&mut self, ctx: &mut C, argument: &ast::Argument<'a>) {
        fire!(self.argument.enter, ctx, argument);
        self.walk_value(ctx, &argument.value);
        fire!(self.argument.leave, ctx, argument);
    }

    fn walk_directives(&mut self, ctx: &mut C, directives: &IndexedList<Directive<'a>>) {
        for directive in directives {
            fire!(self.directive.enter, ctx, directive);
            for argument in &directive.arguments {
                self.walk_argument(ctx, argument);
            }
            fire!(self.directive.leave, ctx, directive);
        }
    }

    fn value_variant_handlers(
        &mut self,
        kind: ValueKind,
    ) -> &mut Handlers<Handler<'a, C, Value<'a>>> {
        match kind {
            ValueKind::Variable => &mut self.variable_value,
            ValueKind::Int => &mut self.int_value,
            ValueKind::Float => &mut self.float_value,
            ValueKind::String => &mut self.string_value,
            ValueKind::Boolean => &mut self.boolean_value,
            ValueKind::Null => &mut self.null_value,
            ValueKind::Enum => &mut self.enum_value,
            ValueKind::List => &mut self.list_value,
            ValueKind::Object => &mut self.object_value,
        }
    }

    fn walk_value(&mut self, ctx: &mut C, value: &Value<'a>) {
        fire!(self.value.enter, ctx, value);
        fire!(self.value_variant_handlers(value.kind()).enter, ctx, value);

        match value {
            Value::List(items) => {
                for item in items {
                    self.walk_value(ctx, item);
                }
            },
            Value::Object(fields) => {
                for field in fields {
                    fire!(self.object_field.enter, ctx, field);
                    self.walk_value(ctx, &field.value);
                    fire!(self.object_field.leave, ctx, field);
                }
            },
            Value::Variable(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::String(_)
            | Value::Boolean(_)
            | Value::Null
            | Value::Enum(_) => {},
        }

        fire!(self.value_variant_handlers(value.kind()).leave, ctx, value);
        fire!(self.value.leave, ctx, value);
    }

    fn walk_type(&mut self, ctx: &mut C, annot: &TypeAnnotation<'a>) {
        fire!(self.type_annotation.enter, ctx, annot);
        if let TypeAnnotation::List(list) = annot {
            self.walk_type(ctx, &list.element_type);
        }
        fire!(self.type_annotation.leave, ctx, annot);
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    fn walk_type_system_definition(
        &mut self,
        ctx: &mut C,
        definition: &TypeSystemDefinition<'a>,
    ) {
        fire!(self.type_system_definition.enter, ctx, definition);
        match definition {
            TypeSystemDefinition::Schema(schema) => {
                fire!(self.schema_definition.enter, ctx, schema);
                self.walk_schema_children(ctx, schema);
                fire!(self.schema_definition.leave, ctx, schema);
            },
            TypeSystemDefinition::Type(type_def) => self.walk_type_definition(ctx, type_def),
            TypeSystemDefinition::Directive(directive_def) => {
                fire!(self.directive_definition.enter, ctx, directive_def);
                for argument in &directive_def.arguments {
                    self.walk_input_value_definition(ctx, argument);
                }
                fire!(self.directive_definition.leave, ctx, directive_def);
            },
        }
        fire!(self.type_system_definition.leave, ctx, definition);
    }

    fn walk_schema_children(&mut self, ctx: &mut C, schema: &ast::SchemaDefinition<'a>) {
        self.walk_directives(ctx, &schema.directives);
        for root in &schema.root_operation_types {
            fire!(self.root_operation_type_definition.enter, ctx, root);
            fire!(self.root_operation_type_definition.leave, ctx, root);
        }
    }

    fn walk_type_definition(&mut self, ctx: &mut C, type_def: &TypeDefinition<'a>) {
        fire!(self.type_definition.enter, ctx, type_def);
        match type_def {
            TypeDefinition::Scalar(def) => fire!(self.scalar_type_definition.enter, ctx, def),
            TypeDefinition::Object(def) => fire!(self.object_type_definition.enter, ctx, def),
            TypeDefinition::Interface(def) => {
                fire!(self.interface_type_definition.enter, ctx, def)
            },
            TypeDefinition::Union(def) => fire!(self.union_type_definition.enter, ctx, def),
            TypeDefinition::Enum(def) => fire!(self.enum_type_definition.enter, ctx, def),
            TypeDefinition::InputObject(def) => {
                fire!(self.input_object_type_definition.enter, ctx, def)
            },
        }

        self.walk_type_definition_children(ctx, type_def);

        match type_def {
            TypeDefinition::Scalar(def) => fire!(self.scalar_type_definition.leave, ctx, def),
            TypeDefinition::Object(def) => fire!(self.object_type_definition.leave, ctx, def),
            TypeDefinition::Interface(def) => {
                fire!(self.interface_type_definition.leave, ctx, def)
            },
            TypeDefinition::Union(def) => fire!(self.union_type_definition.leave, ctx, def),
            TypeDefinition::Enum(def) => fire!(self.enum_type_definition.leave, ctx, def),
            TypeDefinition::InputObject(def) => {
                fire!(self.input_object_type_definition.leave, ctx, def)
            },
        }
        fire!(self.type_definition.leave, ctx, type_def);
    }

    /// Walks everything below a type definition or extension node, without
    /// firing events for the node itself.
    fn walk_type_definition_children(&mut self, ctx: &mut C, type_def: &TypeDefinition<'a>) {
        match type_def {
            TypeDefinition::Scalar(def) => self.walk_directives(ctx, &def.directives),
            TypeDefinition::Object(def) => {
                for interface in &def.interfaces {
                    self.walk_type(ctx, interface);
                }
                self.walk_directives(ctx, &def.directives);
                for field_def in &def.fields {
                    self.walk_field_definition(ctx, field_def);
                }
            },
            TypeDefinition::Interface(def) => {
                for interface in &def.interfaces {
                    self.walk_type(ctx, interface);
                }
                self.walk_directives(ctx, &def.directives);
                for field_def in &def.fields {
                    self.walk_field_definition(ctx, field_def);
                }
            },
            TypeDefinition::Union(def) => {
                self.walk_directives(ctx, &def.directives);
                for member in &def.members {
                    self.walk_type(ctx, member);
                }
            },
            TypeDefinition::Enum(def) => {
                self.walk_directives(ctx, &def.directives);
                for value_def in &def.values {
                    fire!(self.enum_value_definition.enter, ctx, value_def);
                    self.walk_directives(ctx, &value_def.directives);
                    fire!(self.enum_value_definition.leave, ctx, value_def);
                }
            },
            TypeDefinition::InputObject(def) => {
                self.walk_directives(ctx, &def.directives);
                for field_def in &def.fields {
                    self.walk_input_value_definition(ctx, field_def);
                }
            },
        }
    }

    fn walk_field_definition(&mut self, ctx: &mut C, field_def: &ast::FieldDefinition<'a>) {
        fire!(self.field_definition.enter, ctx, field_def);
        for argument in &field_def.arguments {
            self.walk_input_value_definition(ctx, argument);
        }
        self.walk_type(ctx, &field_def.field_type);
        self.walk_directives(ctx, &field_def.directives);
        fire!(self.field_definition.leave, ctx, field_def);
    }

    fn walk_input_value_definition(
        &mut self,
        ctx: &mut C,
        input_value: &ast::InputValueDefinition<'a>,
    ) {
        fire!(self.input_value_definition.enter, ctx, input_value);
        self.walk_type(ctx, &input_value.value_type);
        if let Some(default_value) = &input_value.default_value {
            self.walk_value(ctx, default_value);
        }
        self.walk_directives(ctx, &input_value.directives);
        fire!(self.input_value_definition.leave, ctx, input_value);
    }

    // =========================================================================
    // Type system extensions
    // =========================================================================

    fn walk_type_system_extension(
        &mut self,
        ctx: &mut C,
        extension: &TypeSystemExtension<'a>,
    ) {
        fire!(self.type_system_extension.enter, ctx, extension);
        match extension {
            TypeSystemExtension::Schema(schema) => {
                fire!(self.schema_extension.enter, ctx, schema);
                self.walk_schema_children(ctx, schema);
                fire!(self.schema_extension.leave, ctx, schema);
            },
            TypeSystemExtension::Type(type_ext) => {
                fire!(self.type_extension.enter, ctx, type_ext);
                self.walk_type_definition_children(ctx, type_ext);
                fire!(self.type_extension.leave, ctx, type_ext);
            },
        }
        fire!(self.type_system_extension.leave, ctx, extension);
    }
}
