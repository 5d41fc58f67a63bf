//! Table declarations and DDL. Every table the service persists is listed in [`TABLES`];
//! [`create_all`] materializes them at startup and is safe to run against an existing database.

use crate::db::{quote_ident, Backend, DbPool};
use crate::error::AppError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    /// 64-bit integer primary key assigned by the storage engine.
    Serial,
    Text,
    Timestamp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnDefault {
    /// Storage engine clock at insert time.
    Now,
}

#[derive(Clone, Copy, Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
    pub default: Option<ColumnDefault>,
    /// Secondary index named `ix_<table>_<column>`.
    pub indexed: bool,
}

impl ColumnDef {
    const fn new(name: &'static str, ty: ColumnType) -> Self {
        ColumnDef {
            name,
            ty,
            nullable: false,
            default: None,
            indexed: false,
        }
    }

    const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    const fn default_now(mut self) -> Self {
        self.default = Some(ColumnDefault::Now);
        self
    }

    const fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    /// Filled in by the storage engine; never part of an INSERT column list.
    pub fn is_generated(&self) -> bool {
        self.ty == ColumnType::Serial || self.default.is_some()
    }

    fn definition(&self, backend: Backend) -> String {
        let name = quote_ident(self.name);
        if self.ty == ColumnType::Serial {
            return match backend {
                Backend::Postgres => format!("{} BIGSERIAL PRIMARY KEY", name),
                Backend::Sqlite => format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", name),
            };
        }
        let ty = match (self.ty, backend) {
            (ColumnType::Timestamp, Backend::Postgres) => "TIMESTAMPTZ",
            (ColumnType::Timestamp, Backend::Sqlite) => "TIMESTAMP",
            _ => "TEXT",
        };
        let mut def = format!("{} {}", name, ty);
        if !self.nullable {
            def.push_str(" NOT NULL");
        }
        if let Some(ColumnDefault::Now) = self.default {
            def.push_str(match backend {
                Backend::Postgres => " DEFAULT NOW()",
                Backend::Sqlite => " DEFAULT CURRENT_TIMESTAMP",
            });
        }
        def
    }
}

#[derive(Debug)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
}

impl TableDef {
    pub fn primary_key(&self) -> &'static str {
        self.columns
            .iter()
            .find(|c| c.ty == ColumnType::Serial)
            .map(|c| c.name)
            .unwrap_or("id")
    }

    /// Columns supplied by the caller on insert, in declaration order.
    pub fn insertable_columns(&self) -> impl Iterator<Item = &'static ColumnDef> {
        self.columns.iter().filter(|c| !c.is_generated())
    }

    /// CREATE TABLE followed by one CREATE INDEX per indexed column.
    pub fn create_statements(&self, backend: Backend) -> Vec<String> {
        let table = quote_ident(self.name);
        let cols: Vec<String> = self.columns.iter().map(|c| c.definition(backend)).collect();
        let mut stmts = vec![format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            table,
            cols.join(", ")
        )];
        for c in self.columns.iter().filter(|c| c.indexed) {
            stmts.push(format!(
                "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
                quote_ident(&format!("ix_{}_{}", self.name, c.name)),
                table,
                quote_ident(c.name)
            ));
        }
        stmts
    }

    pub fn drop_statement(&self) -> String {
        format!("DROP TABLE IF EXISTS {}", quote_ident(self.name))
    }
}

pub static WORDS: TableDef = TableDef {
    name: "words",
    columns: &[
        ColumnDef::new("id", ColumnType::Serial),
        ColumnDef::new("term", ColumnType::Text).indexed(),
        ColumnDef::new("meaning", ColumnType::Text),
        ColumnDef::new("example", ColumnType::Text).nullable(),
        ColumnDef::new("part_of_speech", ColumnType::Text).nullable(),
        ColumnDef::new("created_at", ColumnType::Timestamp).default_now(),
    ],
};

/// Every table owned by the service.
pub static TABLES: &[&TableDef] = &[&WORDS];

/// Create all listed tables and their indexes. Existing tables are left untouched.
pub async fn create_all(pool: &DbPool, tables: &[&TableDef]) -> Result<(), AppError> {
    let mut session = pool.acquire().await?;
    let backend = session.backend();
    for table in tables {
        for stmt in table.create_statements(backend) {
            session.execute(&stmt).await?;
        }
        tracing::debug!(table = table.name, "table ready");
    }
    Ok(())
}

/// Drop all listed tables, in reverse declaration order.
pub async fn drop_all(pool: &DbPool, tables: &[&TableDef]) -> Result<(), AppError> {
    let mut session = pool.acquire().await?;
    for table in tables.iter().rev() {
        session.execute(&table.drop_statement()).await?;
    }
    Ok(())
}
