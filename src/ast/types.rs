//! Type tags attached to expression nodes.
//!
//! Parsing leaves every tag unset. The type annotator fills each tag in
//! once; after that the recorded type name never changes, which is what
//! lets the annotator hand back cached results when it meets a node again.

/// Resolved type name of an expression, empty until annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeTag(Option<String>);

impl TypeTag {
    pub fn unset() -> Self {
        TypeTag(None)
    }

    pub fn get(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Records `type_name` if nothing is recorded yet and returns whatever
    /// the tag holds afterwards.
    pub fn set(&mut self, type_name: &str) -> &str {
        self.0.get_or_insert_with(|| String::from(type_name))
    }
}
