use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Alias, Expr, Func, OnConflict, SimpleExpr};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Order,
    QueryFilter, QueryOrder, Select, Set, Statement,
};
use serde_json::Value;
use std::sync::Arc;

use crate::modules::content::adapter::outgoing::document_id::generate_document_id;
use crate::modules::content::adapter::outgoing::sea_orm_entity::documents::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::content::application::ports::outgoing::{
    Document, DocumentData, DocumentQuery, DocumentStore, DocumentStoreError, SortDirection,
};

// ============================================================================
// Store Implementation
// ============================================================================
//
// One row per document: (collection, id) -> jsonb. Equality filters use
// jsonb containment, ordering casts the field to numeric (missing reads as 0)
// and falls back to the insertion sequence.

#[derive(Clone)]
pub struct DocumentStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl DocumentStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DocumentStore for DocumentStorePostgres {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, DocumentStoreError> {
        let model = Entity::find_by_id((collection.to_string(), id.to_string()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        model.map(model_to_document).transpose()
    }

    async fn query(
        &self,
        collection: &str,
        query: DocumentQuery,
    ) -> Result<Vec<Document>, DocumentStoreError> {
        let models = select_documents(collection, &query)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_document).collect()
    }

    async fn add(&self, collection: &str, data: DocumentData) -> Result<String, DocumentStoreError> {
        let id = generate_document_id();

        let model = ActiveModel {
            collection: Set(collection.to_string()),
            id: Set(id.clone()),
            data: Set(Value::Object(data)),
            seq: NotSet,
        };

        Entity::insert(model)
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(id)
    }

    async fn set(
        &self,
        collection: &str,
        id: &str,
        data: DocumentData,
    ) -> Result<(), DocumentStoreError> {
        let model = ActiveModel {
            collection: Set(collection.to_string()),
            id: Set(id.to_string()),
            data: Set(Value::Object(data)),
            seq: NotSet,
        };

        Entity::insert(model)
            .on_conflict(
                OnConflict::columns([Column::Collection, Column::Id])
                    .update_column(Column::Data)
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        data: DocumentData,
    ) -> Result<(), DocumentStoreError> {
        // jsonb || jsonb replaces top-level keys and keeps the rest
        let merged: SimpleExpr =
            PgExpr::concatenate(Expr::col(Column::Data), Expr::val(Value::Object(data)));

        let result = Entity::update_many()
            .col_expr(Column::Data, merged)
            .filter(Column::Collection.eq(collection))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(DocumentStoreError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), DocumentStoreError> {
        Entity::delete_many()
            .filter(Column::Collection.eq(collection))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), DocumentStoreError> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1",
            ))
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn select_documents(collection: &str, query: &DocumentQuery) -> Select<Entity> {
    let mut select = Entity::find().filter(Column::Collection.eq(collection));

    for (field, value) in &query.filters {
        let mut needle = DocumentData::new();
        needle.insert(field.clone(), value.clone());
        let contains: SimpleExpr =
            PgExpr::contains(Expr::col(Column::Data), Expr::val(Value::Object(needle)));
        select = select.filter(contains);
    }

    if let Some(order_by) = &query.order_by {
        let numeric: SimpleExpr = Func::cast_as(
            PgExpr::cast_json_field(Expr::col(Column::Data), order_by.field.clone()),
            Alias::new("numeric"),
        )
        .into();
        let key: SimpleExpr = Func::coalesce([numeric, Expr::val(0).into()]).into();

        let direction = match order_by.direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };
        select = select.order_by(key, direction);
    }

    select.order_by_asc(Column::Seq)
}

fn model_to_document(model: documents::Model) -> Result<Document, DocumentStoreError> {
    match model.data {
        Value::Object(data) => Ok(Document { id: model.id, data }),
        other => Err(DocumentStoreError::SerializationError(format!(
            "document {}/{} is not an object: {}",
            model.collection, model.id, other
        ))),
    }
}

fn map_db_err(e: DbErr) -> DocumentStoreError {
    DocumentStoreError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
