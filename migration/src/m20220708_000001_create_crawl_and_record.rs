// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create crawl table
        manager
            .create_table(
                Table::create()
                    .table(Crawl::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Crawl::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Crawl::Begin).double().not_null())
                    .col(ColumnDef::new(Crawl::End).double())
                    .to_owned(),
            )
            .await?;

        // Create record table
        manager
            .create_table(
                Table::create()
                    .table(Record::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Record::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Record::Qid).big_integer())
                    .col(ColumnDef::new(Record::CrawlId).integer().not_null())
                    .col(ColumnDef::new(Record::HitAt).double())
                    .col(ColumnDef::new(Record::Ranking).integer().not_null())
                    .col(ColumnDef::new(Record::Title).text().not_null())
                    .col(ColumnDef::new(Record::Heat).text().not_null())
                    .col(ColumnDef::new(Record::Created).big_integer())
                    .col(ColumnDef::new(Record::VisitCount).big_integer())
                    .col(ColumnDef::new(Record::FollowerCount).big_integer())
                    .col(ColumnDef::new(Record::AnswerCount).big_integer())
                    .col(ColumnDef::new(Record::Excerpt).text())
                    .col(ColumnDef::new(Record::Raw).text())
                    .col(ColumnDef::new(Record::Url).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_record_crawl")
                            .from(Record::Table, Record::CrawlId)
                            .to(Crawl::Table, Crawl::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_record_crawl_id")
                    .table(Record::Table)
                    .col(Record::CrawlId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Record::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Crawl::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Crawl {
    Table,
    Id,
    Begin,
    End,
}

#[derive(DeriveIden)]
enum Record {
    Table,
    Id,
    Qid,
    CrawlId,
    HitAt,
    Ranking,
    Title,
    Heat,
    Created,
    #[sea_orm(iden = "visitCount")]
    VisitCount,
    #[sea_orm(iden = "followerCount")]
    FollowerCount,
    #[sea_orm(iden = "answerCount")]
    AnswerCount,
    Excerpt,
    Raw,
    Url,
}
