//! Builds parameterized SELECT, INSERT and DELETE from a table declaration.

use crate::db::quote_ident;
use crate::schema::TableDef;

fn column_list(table: &TableDef) -> String {
    table
        .columns
        .iter()
        .map(|c| quote_ident(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT by primary key. Caller binds the id as `$1`.
pub fn select_by_id(table: &TableDef) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        column_list(table),
        quote_ident(table.name),
        quote_ident(table.primary_key())
    )
}

/// SELECT page ordered by primary key. Caller binds limit as `$1` and offset as `$2`.
pub fn select_list(table: &TableDef) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {} LIMIT $1 OFFSET $2",
        column_list(table),
        quote_ident(table.name),
        quote_ident(table.primary_key())
    )
}

/// INSERT of every non-generated column, returning the full row so server-assigned values
/// come back in the same round trip. Placeholders follow [`TableDef::insertable_columns`] order.
pub fn insert(table: &TableDef) -> String {
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for (i, c) in table.insertable_columns().enumerate() {
        cols.push(quote_ident(c.name));
        placeholders.push(format!("${}", i + 1));
    }
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quote_ident(table.name),
        cols.join(", "),
        placeholders.join(", "),
        column_list(table)
    )
}

/// DELETE by primary key. Caller binds the id as `$1`.
pub fn delete(table: &TableDef) -> String {
    format!(
        "DELETE FROM {} WHERE {} = $1",
        quote_ident(table.name),
        quote_ident(table.primary_key())
    )
}
