use docmcp_types::Document;

/// Read-only document store.
///
/// All implementations must satisfy these invariants:
/// - Document ids are unique.
/// - The contents never change after construction.
/// - `all()` yields documents in a stable order, which is the order search
///   results are reported in.
pub trait DocumentStore: Send + Sync {
    /// Every document, in store order.
    fn all(&self) -> &[Document];

    /// Look up a document by exact id. Returns `None` if absent.
    fn by_id(&self, id: &str) -> Option<&Document>;

    /// Number of documents.
    fn len(&self) -> usize {
        self.all().len()
    }

    /// Returns `true` if the store holds no documents.
    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}
