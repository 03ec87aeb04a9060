use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create documents table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Documents::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Documents::Collection).text().not_null())
                    .col(ColumnDef::new(Documents::Id).text().not_null())
                    .col(ColumnDef::new(Documents::Data).json_binary().not_null())
                    .col(
                        ColumnDef::new(Documents::Seq)
                            .big_integer()
                            .not_null()
                            .auto_increment(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_documents")
                            .col(Documents::Collection)
                            .col(Documents::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Insertion order inside a collection (tie-break for ordered reads)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_documents_collection_seq
                ON documents (collection, seq);
                "#,
            )
            .await?;

        // Containment filters such as `data @> '{"visible": true}'`
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_documents_data
                ON documents USING GIN (data);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_documents_collection_seq;
                DROP INDEX IF EXISTS idx_documents_data;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Documents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Documents {
    Table,
    Collection,
    Id,
    Data,
    Seq,
}
