use crate::dataset::update;
use crate::error::Error;
use crate::expression::helpers::{asc, desc, eq, gt, lit_args};
use crate::expression::Record;
use crate::param::Param;

#[test]
fn set_and_where_render_literal_by_default() {
    let d = update("users")
        .set(Record::new().set("name", "Sally").set("active", true))
        .where_(eq("id", 5_i64));
    let (sql, params) = d.to_sql().expect("render");
    assert_eq!(
        sql,
        r#"UPDATE "users" SET "name" = 'Sally', "active" = TRUE WHERE "id" = 5"#
    );
    assert!(params.is_empty());
}

#[test]
fn prepared_numbered_placeholders_on_postgres() {
    let d = update("users")
        .with_dialect("postgres")
        .set(Record::new().set("name", "Sally"))
        .where_(eq("id", 5_i64))
        .prepared(true);
    let (sql, params) = d.to_sql().expect("render");
    assert_eq!(sql, r#"UPDATE "users" SET "name" = $1 WHERE "id" = $2"#);
    assert_eq!(params, vec![Param::from("Sally"), Param::I64(5)]);
}

#[test]
fn multiple_where_calls_join_with_and() {
    let d = update("users")
        .set(Record::new().set("active", false))
        .where_(gt("age", 60_i64))
        .where_(eq("active", true));
    let (sql, _) = d.to_sql().expect("render");
    assert_eq!(
        sql,
        r#"UPDATE "users" SET "active" = FALSE WHERE "age" > 60 AND "active" = TRUE"#
    );
}

#[test]
fn expression_assignment_via_lit_args() {
    let d = update("items")
        .set(Record::new().set_expr("price", lit_args("price * ?", [2_i64])))
        .prepared(true);
    let (sql, params) = d.to_sql().expect("render");
    assert_eq!(sql, r#"UPDATE "items" SET "price" = price * ?"#);
    assert_eq!(params, vec![Param::I64(2)]);
}

#[test]
fn order_prepend_puts_new_terms_first() {
    let d = update("users")
        .set(Record::new().set("active", false))
        .order([asc("name")])
        .order_prepend([desc("id")]);
    let (sql, _) = d.to_sql().expect("render");
    assert_eq!(
        sql,
        r#"UPDATE "users" SET "active" = FALSE ORDER BY "id" DESC, "name" ASC"#
    );
}

#[test]
fn limit_zero_removes_a_previous_limit() {
    let d = update("users")
        .set(Record::new().set("active", false))
        .limit(10)
        .limit(0);
    let (sql, _) = d.to_sql().expect("render");
    assert_eq!(sql, r#"UPDATE "users" SET "active" = FALSE"#);
}

#[test]
fn clear_limit_removes_a_previous_limit() {
    let d = update("users")
        .set(Record::new().set("active", false))
        .limit(10)
        .clear_limit();
    let (sql, _) = d.to_sql().expect("render");
    assert_eq!(sql, r#"UPDATE "users" SET "active" = FALSE"#);
}

#[test]
fn missing_set_is_reported_at_render_time() {
    let d = update("users").where_(eq("id", 1_i64));
    assert_eq!(d.to_sql(), Err(Error::EmptySetClause));
}

#[test]
#[should_panic(expected = "unsupported table argument")]
fn ordered_expression_in_table_position_panics() {
    let _ = update(crate::expression::Expression::from(asc("users")));
}

#[test]
fn branching_keeps_the_base_untouched() {
    let base = update("users").set(Record::new().set("active", false));
    let narrowed = base.where_(eq("id", 1_i64));
    assert_eq!(
        base.to_sql().expect("base").0,
        r#"UPDATE "users" SET "active" = FALSE"#
    );
    assert_eq!(
        narrowed.to_sql().expect("narrowed").0,
        r#"UPDATE "users" SET "active" = FALSE WHERE "id" = 1"#
    );
}
