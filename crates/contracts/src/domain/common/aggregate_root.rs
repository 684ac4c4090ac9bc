/// Root of an aggregate served by the backend as a REST collection.
pub trait AggregateRoot {
    /// Numeric record id assigned by the backend
    fn id(&self) -> i64;

    /// REST collection name (e.g. "items")
    fn collection_name() -> &'static str;

    /// Collection endpoint relative to the API base (e.g. "/items")
    fn collection_path() -> String {
        format!("/{}", Self::collection_name())
    }

    /// Member endpoint relative to the API base (e.g. "/items/42")
    fn member_path(id: i64) -> String {
        format!("/{}/{}", Self::collection_name(), id)
    }
}
