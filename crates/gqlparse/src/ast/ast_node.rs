/// Source reconstruction for AST nodes.
///
/// Implemented via `#[inherent] impl AstNode` so the methods are callable
/// without importing the trait. The output is canonical GraphQL (see
/// [`printer`](crate::printer)): re-parsing it yields a node equal to the
/// original, but the original's whitespace, comments and commas are not
/// preserved.
pub trait AstNode {
    /// Append this node's source representation to `sink`.
    fn append_source(&self, sink: &mut String);

    /// Return this node as a source string.
    fn to_source(&self) -> String {
        let mut s = String::new();
        self.append_source(&mut s);
        s
    }
}
