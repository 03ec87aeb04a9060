pub mod document_store;

pub use document_store::{
    Document, DocumentData, DocumentQuery, DocumentStore, DocumentStoreError, OrderBy,
    SortDirection,
};
