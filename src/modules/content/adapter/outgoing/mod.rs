mod document_id;
pub mod document_store_postgres;
pub mod in_memory_document_store;
pub mod sea_orm_entity;

pub use document_store_postgres::DocumentStorePostgres;
pub use in_memory_document_store::InMemoryDocumentStore;
