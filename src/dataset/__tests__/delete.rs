use crate::dataset::delete;
use crate::error::Error;
use crate::expression::helpers::{asc, eq, in_list, lit};
use crate::expression::SqlQuery;
use crate::param::Param;

#[test]
fn where_limit_prepared_binds_only_the_predicate() {
    let d = delete("users")
        .where_(eq("id", 5_i64))
        .limit(1)
        .prepared(true);
    let (sql, params) = d.to_sql().expect("render");
    assert_eq!(sql, r#"DELETE FROM "users" WHERE "id" = ? LIMIT 1"#);
    assert_eq!(params, vec![Param::I64(5)]);
}

#[test]
fn in_list_expands_per_value() {
    let d = delete("users")
        .with_dialect("postgres")
        .where_(in_list("id", [1_i64, 2, 3]))
        .prepared(true);
    let (sql, params) = d.to_sql().expect("render");
    assert_eq!(sql, r#"DELETE FROM "users" WHERE "id" IN ($1, $2, $3)"#);
    assert_eq!(params, vec![Param::I64(1), Param::I64(2), Param::I64(3)]);
}

#[test]
fn empty_in_list_is_a_render_error() {
    let d = delete("users").where_(in_list("id", Vec::<i64>::new()));
    assert_eq!(
        d.to_sql(),
        Err(Error::invalid("IN list has no values"))
    );
}

#[test]
fn limit_zero_leaves_the_statement_unbounded() {
    let d = delete("users").where_(eq("id", 1_i64)).limit(0);
    let (sql, _) = d.to_sql().expect("render");
    assert_eq!(sql, r#"DELETE FROM "users" WHERE "id" = 1"#);
}

#[test]
fn order_and_limit_are_dropped_on_postgres() {
    let d = delete("users")
        .with_dialect("postgres")
        .where_(eq("id", 1_i64))
        .order([asc("id")])
        .limit(1)
        .prepared(true);
    let (sql, _) = d.to_sql().expect("render");
    assert_eq!(sql, r#"DELETE FROM "users" WHERE "id" = $1"#);
}

#[test]
fn returning_renders_after_the_predicate() {
    let d = delete("users")
        .with_dialect("postgres")
        .where_(eq("id", 1_i64))
        .returning(["id", "name"])
        .prepared(true);
    let (sql, _) = d.to_sql().expect("render");
    assert_eq!(
        sql,
        r#"DELETE FROM "users" WHERE "id" = $1 RETURNING "id", "name""#
    );
}

#[test]
fn cte_prefix_on_delete() {
    let d = delete("sessions")
        .with("stale", SqlQuery::new("SELECT id FROM sessions WHERE expired"))
        .where_(lit("id IN (SELECT id FROM stale)"));
    let (sql, _) = d.to_sql().expect("render");
    assert_eq!(
        sql,
        r#"WITH stale AS (SELECT id FROM sessions WHERE expired) DELETE FROM "sessions" WHERE id IN (SELECT id FROM stale)"#
    );
}

#[test]
#[should_panic(expected = "unsupported table argument")]
fn literal_in_delete_table_position_panics() {
    let _ = delete(lit("users AS u"));
}

#[test]
fn schema_qualified_table_quotes_each_part() {
    let (sql, _) = delete("analytics.events")
        .where_(eq("id", 1_i64))
        .to_sql()
        .expect("render");
    assert_eq!(sql, r#"DELETE FROM "analytics"."events" WHERE "id" = 1"#);
}
