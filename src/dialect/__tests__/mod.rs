#![cfg(test)]

use std::sync::Arc;

use crate::clauses::{
    DeleteClauses, InsertClauses, Limit, TruncateClauses, TruncateOptions, UpdateClauses,
};
use crate::dialect::{
    default_dialect, get_dialect, register_dialect, CommonDialect, DialectOptions, Feature,
    PlaceholderStyle, SqlDialect, DEFAULT_DIALECT,
};
use crate::error::Error;
use crate::expression::helpers::{asc, col, do_update, eq, excluded};
use crate::expression::{ColumnList, CommonTableExpression, Record, SqlQuery};
use crate::param::Param;
use crate::sql_builder::SqlBuilder;

fn update_sql(dialect: &str, prepared: bool, c: &UpdateClauses) -> Result<(String, Vec<Param>), Error> {
    let d = get_dialect(dialect);
    let mut b = SqlBuilder::new(prepared, d.options().placeholder);
    d.to_update_sql(&mut b, c);
    b.finish()
}

fn delete_sql(dialect: &str, prepared: bool, c: &DeleteClauses) -> Result<(String, Vec<Param>), Error> {
    let d = get_dialect(dialect);
    let mut b = SqlBuilder::new(prepared, d.options().placeholder);
    d.to_delete_sql(&mut b, c);
    b.finish()
}

fn truncate_sql(dialect: &str, c: &TruncateClauses) -> Result<(String, Vec<Param>), Error> {
    let d = get_dialect(dialect);
    let mut b = SqlBuilder::new(false, d.options().placeholder);
    d.to_truncate_sql(&mut b, c);
    b.finish()
}

fn insert_sql(dialect: &str, prepared: bool, c: &InsertClauses) -> Result<(String, Vec<Param>), Error> {
    let d = get_dialect(dialect);
    let mut b = SqlBuilder::new(prepared, d.options().placeholder);
    d.to_insert_sql(&mut b, c);
    b.finish()
}

// ---- registry ----

#[test]
fn registry_resolves_builtins() {
    assert_eq!(get_dialect("postgres").name(), "postgres");
    assert_eq!(get_dialect("mysql").name(), "mysql");
    assert_eq!(get_dialect("sqlite").name(), "sqlite");
    assert_eq!(default_dialect().name(), DEFAULT_DIALECT);
}

#[test]
fn unknown_name_falls_back_to_default() {
    let d = get_dialect("no-such-dialect");
    assert_eq!(d.name(), DEFAULT_DIALECT);
}

#[test]
fn custom_dialect_is_retrievable() {
    let options = DialectOptions {
        quote_left: '[',
        quote_right: ']',
        ..DialectOptions::default()
    };
    register_dialect("bracketsql", Arc::new(CommonDialect::new("bracketsql", options)));
    let d = get_dialect("bracketsql");
    assert_eq!(d.name(), "bracketsql");
    assert_eq!(d.options().quote_left, '[');
}

#[test]
fn options_drive_feature_probes() {
    let pg = get_dialect("postgres");
    assert_eq!(pg.options().placeholder, PlaceholderStyle::Numbered);
    assert!(pg.supports(Feature::Returning));
    assert!(!pg.supports(Feature::MutationOrderLimit));

    let my = get_dialect("mysql");
    assert!(!my.supports(Feature::Returning));
    assert!(!my.supports(Feature::ConflictClause));
    assert!(my.supports(Feature::MutationOrderLimit));

    let lite = get_dialect("sqlite");
    assert!(!lite.supports(Feature::Truncate));
    assert!(lite.supports(Feature::Returning));
}

// ---- INSERT ----

#[test]
fn insert_empty_renders_default_values() {
    let c = InsertClauses::new().set_into(col("users"));
    let (sql, _) = insert_sql(DEFAULT_DIALECT, false, &c).expect("render");
    assert_eq!(sql, r#"INSERT INTO "users" DEFAULT VALUES"#);
}

#[test]
fn insert_without_table_is_an_error() {
    let c = InsertClauses::new().set_vals(Some(vec![vec![Param::I64(1)]]));
    assert_eq!(
        insert_sql(DEFAULT_DIALECT, false, &c),
        Err(Error::MissingTable {
            statement: "INSERT"
        })
    );
}

#[test]
fn insert_conflict_update_references_excluded() {
    let set = Record::new().set_expr("name", excluded("name"));
    let c = InsertClauses::new()
        .set_into(col("users"))
        .set_cols(Some(ColumnList::new(["name"])))
        .set_vals(Some(vec![vec![Param::from("Bob")]]))
        .set_on_conflict(Some(do_update("name", set)));
    let (sql, params) = insert_sql("postgres", true, &c).expect("render");
    assert_eq!(
        sql,
        r#"INSERT INTO "users" ("name") VALUES ($1) ON CONFLICT (name) DO UPDATE SET "name" = "excluded"."name""#
    );
    assert_eq!(params, vec![Param::from("Bob")]);
}

#[test]
fn insert_conflict_is_rejected_on_mysql() {
    let c = InsertClauses::new()
        .set_into(col("users"))
        .set_vals(Some(vec![vec![Param::I64(1)]]))
        .set_on_conflict(Some(crate::expression::ConflictExpression::do_nothing()));
    assert_eq!(
        insert_sql("mysql", false, &c),
        Err(Error::UnsupportedFeature {
            feature: Feature::ConflictClause,
            dialect: "mysql".to_string(),
        })
    );
}

// ---- UPDATE ----

#[test]
fn update_renders_set_and_where() {
    let set = Record::new().set("name", "Bob").set("age", 30_i64);
    let c = UpdateClauses::new()
        .set_table(col("users"))
        .set_set_values(set)
        .where_append(eq("id", 5_i64));
    let (sql, params) = update_sql(DEFAULT_DIALECT, true, &c).expect("render");
    assert_eq!(
        sql,
        r#"UPDATE "users" SET "name" = ?, "age" = ? WHERE "id" = ?"#
    );
    assert_eq!(
        params,
        vec![Param::from("Bob"), Param::I64(30), Param::I64(5)]
    );
}

#[test]
fn update_without_set_is_an_error() {
    let c = UpdateClauses::new().set_table(col("users"));
    assert_eq!(update_sql(DEFAULT_DIALECT, false, &c), Err(Error::EmptySetClause));
}

#[test]
fn update_with_empty_record_is_an_error() {
    let c = UpdateClauses::new()
        .set_table(col("users"))
        .set_set_values(Record::new());
    assert_eq!(update_sql(DEFAULT_DIALECT, false, &c), Err(Error::EmptySetClause));
}

#[test]
fn update_from_renders_extra_tables() {
    let set = Record::new().set_expr("name", col("accounts.name"));
    let c = UpdateClauses::new()
        .set_table(col("users"))
        .set_set_values(set)
        .set_from(Some(ColumnList::new(["accounts"])));
    let (sql, _) = update_sql("postgres", false, &c).expect("render");
    assert_eq!(
        sql,
        r#"UPDATE "users" SET "name" = "accounts"."name" FROM "accounts""#
    );
}

#[test]
fn update_from_is_rejected_on_mysql() {
    let set = Record::new().set("name", "x");
    let c = UpdateClauses::new()
        .set_table(col("users"))
        .set_set_values(set)
        .set_from(Some(ColumnList::new(["accounts"])));
    assert_eq!(
        update_sql("mysql", false, &c),
        Err(Error::UnsupportedFeature {
            feature: Feature::UpdateFrom,
            dialect: "mysql".to_string(),
        })
    );
}

#[test]
fn update_order_and_limit_render_on_mysql() {
    let set = Record::new().set("active", false);
    let c = UpdateClauses::new()
        .set_table(col("users"))
        .set_set_values(set)
        .set_order(vec![asc("id")])
        .set_limit(Limit::Count(10));
    let (sql, _) = update_sql("mysql", false, &c).expect("render");
    assert_eq!(
        sql,
        "UPDATE `users` SET `active` = FALSE ORDER BY `id` ASC LIMIT 10"
    );
}

#[test]
fn update_order_and_limit_are_dropped_on_postgres() {
    let set = Record::new().set("active", false);
    let c = UpdateClauses::new()
        .set_table(col("users"))
        .set_set_values(set)
        .set_order(vec![asc("id")])
        .set_limit(Limit::Count(10));
    let (sql, _) = update_sql("postgres", false, &c).expect("render");
    assert_eq!(sql, r#"UPDATE "users" SET "active" = FALSE"#);
}

#[test]
fn update_with_cte_prefix() {
    let set = Record::new().set("flag", true);
    let c = UpdateClauses::new()
        .common_tables_append(CommonTableExpression::new(
            false,
            "recent",
            SqlQuery::new("SELECT id FROM logins").into(),
        ))
        .set_table(col("users"))
        .set_set_values(set);
    let (sql, _) = update_sql(DEFAULT_DIALECT, false, &c).expect("render");
    assert_eq!(
        sql,
        r#"WITH recent AS (SELECT id FROM logins) UPDATE "users" SET "flag" = TRUE"#
    );
}

// ---- DELETE ----

#[test]
fn delete_renders_where_order_limit() {
    let c = DeleteClauses::new()
        .set_from("users".into())
        .where_append(eq("id", 5_i64))
        .set_order(vec![asc("id")])
        .set_limit(Limit::Count(1));
    let (sql, params) = delete_sql(DEFAULT_DIALECT, true, &c).expect("render");
    assert_eq!(sql, r#"DELETE FROM "users" WHERE "id" = ? ORDER BY "id" ASC LIMIT 1"#);
    assert_eq!(params, vec![Param::I64(5)]);
}

#[test]
fn delete_limit_all_renders_keyword() {
    let c = DeleteClauses::new().set_from("t".into()).set_limit(Limit::All);
    let (sql, _) = delete_sql(DEFAULT_DIALECT, false, &c).expect("render");
    assert_eq!(sql, r#"DELETE FROM "t" LIMIT ALL"#);
}

#[test]
fn delete_without_table_is_an_error() {
    let c = DeleteClauses::new().where_append(eq("id", 1_i64));
    assert_eq!(
        delete_sql(DEFAULT_DIALECT, false, &c),
        Err(Error::MissingTable {
            statement: "DELETE"
        })
    );
}

#[test]
fn delete_returning_is_rejected_on_mysql() {
    let c = DeleteClauses::new()
        .set_from("users".into())
        .set_returning(Some(ColumnList::new(["id"])));
    assert_eq!(
        delete_sql("mysql", false, &c),
        Err(Error::UnsupportedFeature {
            feature: Feature::Returning,
            dialect: "mysql".to_string(),
        })
    );
}

// ---- TRUNCATE ----

#[test]
fn truncate_renders_options_in_fixed_order() {
    let c = TruncateClauses::new()
        .set_table(ColumnList::new(["users"]))
        .set_options(TruncateOptions {
            identity: Some("restart".to_string()),
            cascade: true,
            restrict: false,
        });
    let (sql, _) = truncate_sql(DEFAULT_DIALECT, &c).expect("render");
    assert_eq!(sql, r#"TRUNCATE "users" CASCADE RESTART IDENTITY"#);
}

#[test]
fn truncate_multiple_tables() {
    let c = TruncateClauses::new().set_table(ColumnList::new(["users", "accounts"]));
    let (sql, _) = truncate_sql("postgres", &c).expect("render");
    assert_eq!(sql, r#"TRUNCATE "users", "accounts""#);
}

#[test]
fn truncate_is_rejected_on_sqlite() {
    let c = TruncateClauses::new().set_table(ColumnList::new(["users"]));
    assert_eq!(
        truncate_sql("sqlite", &c),
        Err(Error::UnsupportedFeature {
            feature: Feature::Truncate,
            dialect: "sqlite".to_string(),
        })
    );
}

#[test]
fn truncate_options_are_rejected_on_mysql() {
    let c = TruncateClauses::new()
        .set_table(ColumnList::new(["users"]))
        .set_options(TruncateOptions {
            cascade: true,
            ..TruncateOptions::default()
        });
    assert_eq!(
        truncate_sql("mysql", &c),
        Err(Error::UnsupportedFeature {
            feature: Feature::TruncateOptions,
            dialect: "mysql".to_string(),
        })
    );
}

#[test]
fn truncate_without_table_is_an_error() {
    let c = TruncateClauses::new();
    assert_eq!(
        truncate_sql(DEFAULT_DIALECT, &c),
        Err(Error::MissingTable {
            statement: "TRUNCATE"
        })
    );
}
