use crate::domain::ports::DocumentSink;

/// A composable piece of a payment request document.
pub trait Fragment {
    /// Appends this fragment's material under `parent`.
    ///
    /// Returns whether anything was appended. Compilation only reads the
    /// accumulated fields, so compiling twice yields the same subtree.
    fn compile<S: DocumentSink>(&self, sink: &mut S, parent: S::Node) -> bool;
}
