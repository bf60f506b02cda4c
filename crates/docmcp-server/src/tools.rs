use docmcp_protocol::{ProtocolResult, ToolCall, ToolResponse};
use docmcp_store::{search, DocumentStore};

/// Run a decoded tool call against the store.
///
/// A missing fetch target is a successful call with `isError: true`, not an
/// error return.
pub fn execute<S: DocumentStore + ?Sized>(store: &S, call: &ToolCall) -> ProtocolResult<ToolResponse> {
    match call {
        ToolCall::Search(req) => ToolResponse::search_results(search(store, &req.query)),
        ToolCall::Fetch(req) => match store.by_id(&req.id) {
            Some(doc) => ToolResponse::document(doc),
            None => {
                tracing::debug!(id = %req.id, "fetch target not found");
                ToolResponse::document_not_found(&req.id)
            }
        },
    }
}
