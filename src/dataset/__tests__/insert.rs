use crate::dataset::insert;
use crate::error::Error;
use crate::expression::helpers::{do_nothing, do_update, eq, excluded, lit, val};
use crate::expression::{Appendable, Identifier, Record, SqlQuery};
use crate::param::Param;

#[test]
fn record_rows_render_in_insertion_order() {
    let d = insert("users").rows([
        Record::new().set("name", "Bob").set("age", 30_i64),
        Record::new().set("name", "Sally").set("age", 41_i64),
    ]);
    let (sql, params) = d.to_sql().expect("render");
    assert_eq!(
        sql,
        r#"INSERT INTO "users" ("name", "age") VALUES ('Bob', 30), ('Sally', 41)"#
    );
    assert!(params.is_empty());
}

#[test]
fn prepared_rows_bind_values_left_to_right() {
    let d = insert("users")
        .with_dialect("postgres")
        .rows([Record::new().set("name", "Bob").set("age", 30_i64)])
        .prepared(true);
    let (sql, params) = d.to_sql().expect("render");
    assert_eq!(sql, r#"INSERT INTO "users" ("name", "age") VALUES ($1, $2)"#);
    assert_eq!(params, vec![Param::from("Bob"), Param::I64(30)]);
}

#[test]
fn explicit_cols_with_literal_vals() {
    let d = insert("users")
        .cols(["name", "age"])
        .vals([vec![Param::from("Bob"), Param::I64(30)]]);
    let (sql, _) = d.to_sql().expect("render");
    assert_eq!(sql, r#"INSERT INTO "users" ("name", "age") VALUES ('Bob', 30)"#);
}

#[test]
fn mismatched_row_length_is_a_render_error() {
    let d = insert("users")
        .cols(["name", "age"])
        .vals([vec![Param::from("Bob")]]);
    assert_eq!(
        d.to_sql(),
        Err(Error::MismatchedRowLength {
            expected: 2,
            got: 1
        })
    );
}

#[test]
fn record_rows_with_differing_column_counts_are_a_render_error() {
    let d = insert("users").rows([
        Record::new().set("name", "Bob").set("age", 30_i64),
        Record::new().set("name", "Sally"),
    ]);
    assert_eq!(
        d.to_sql(),
        Err(Error::MismatchedRowLength {
            expected: 2,
            got: 1
        })
    );
}

#[test]
fn record_rows_with_differing_column_names_are_a_render_error() {
    let d = insert("users").rows([
        Record::new().set("name", "Bob"),
        Record::new().set("email", "sally@example.com"),
    ]);
    let err = d.to_sql().expect_err("must fail");
    assert!(err.to_string().contains("missing column"));
}

#[test]
fn no_row_source_renders_default_values() {
    let (sql, _) = insert("users").to_sql().expect("render");
    assert_eq!(sql, r#"INSERT INTO "users" DEFAULT VALUES"#);
}

#[test]
fn last_set_row_source_wins() {
    let base = insert("users").vals([vec![Param::I64(1)]]).cols(["id"]);
    let d = base.rows([Record::new().set("id", 2_i64)]);
    let (sql, _) = d.to_sql().expect("render");
    assert_eq!(sql, r#"INSERT INTO "users" ("id") VALUES (2)"#);

    let d = d.vals([vec![Param::I64(3)]]);
    let (sql, _) = d.to_sql().expect("render");
    assert_eq!(sql, r#"INSERT INTO "users" ("id") VALUES (1), (3)"#);
}

#[test]
fn clearing_the_active_source_falls_back_to_the_other() {
    let d = insert("users")
        .cols(["id"])
        .vals([vec![Param::I64(1)]])
        .rows([Record::new().set("id", 2_i64)])
        .clear_rows();
    let (sql, _) = d.to_sql().expect("render");
    assert_eq!(sql, r#"INSERT INTO "users" ("id") VALUES (1)"#);
}

#[test]
fn query_source_renders_inline() {
    let d = insert("users")
        .cols(["name"])
        .from_query(SqlQuery::new("SELECT name FROM imports WHERE age > ?").bind(18_i64))
        .prepared(true);
    let (sql, params) = d.to_sql().expect("render");
    assert_eq!(
        sql,
        r#"INSERT INTO "users" ("name") SELECT name FROM imports WHERE age > ?"#
    );
    assert_eq!(params, vec![Param::I64(18)]);
}

#[test]
fn query_source_adopts_the_outer_dialect() {
    let d = insert("users")
        .with_dialect("postgres")
        .from_query(SqlQuery::new("SELECT 1"));
    assert_eq!(d.clauses().from().expect("query").dialect_name(), "postgres");
}

#[test]
#[should_panic(expected = "incompatible dialects")]
fn query_source_with_conflicting_dialect_panics() {
    let query = SqlQuery::new("SELECT 1").with_dialect("mysql");
    let _ = insert("users").with_dialect("postgres").from_query(query);
}

#[test]
#[should_panic(expected = "unsupported table argument")]
fn value_in_table_position_panics() {
    let _ = insert(val(5));
}

#[test]
fn literal_table_is_accepted() {
    let (sql, _) = insert(lit("users AS u")).to_sql().expect("render");
    assert_eq!(sql, "INSERT INTO users AS u DEFAULT VALUES");
}

#[test]
fn alias_and_returning() {
    let d = insert("users")
        .with_dialect("postgres")
        .as_("new_users")
        .rows([Record::new().set("name", "Bob")])
        .returning(["id"]);
    let (sql, _) = d.to_sql().expect("render");
    assert_eq!(
        sql,
        r#"INSERT INTO "users" AS "new_users" ("name") VALUES ('Bob') RETURNING "id""#
    );
    assert!(d.returns_columns());
    assert_eq!(d.get_as(), Some(&Identifier::parse("new_users")));
}

#[test]
fn conflict_do_nothing() {
    let d = insert("users")
        .rows([Record::new().set("name", "Bob")])
        .on_conflict(do_nothing());
    let (sql, _) = d.to_sql().expect("render");
    assert_eq!(
        sql,
        r#"INSERT INTO "users" ("name") VALUES ('Bob') ON CONFLICT DO NOTHING"#
    );
}

#[test]
fn conflict_do_update_with_predicate() {
    let set = Record::new().set_expr("name", excluded("name"));
    let conflict = do_update("name", set).where_update(eq("allow_update", true));
    let d = insert("users")
        .rows([Record::new().set("name", "Bob")])
        .on_conflict(conflict)
        .prepared(true);
    let (sql, params) = d.to_sql().expect("render");
    assert_eq!(
        sql,
        r#"INSERT INTO "users" ("name") VALUES (?) ON CONFLICT (name) DO UPDATE SET "name" = "excluded"."name" WHERE "allow_update" = ?"#
    );
    assert_eq!(params, vec![Param::from("Bob"), Param::Bool(true)]);
}

#[test]
fn datasets_branch_without_observing_each_other() {
    let base = insert("users").cols(["id"]);
    let a = base.vals([vec![Param::I64(1)]]);
    let b = base.vals([vec![Param::I64(2)]]);
    assert_eq!(
        a.to_sql().expect("a").0,
        r#"INSERT INTO "users" ("id") VALUES (1)"#
    );
    assert_eq!(
        b.to_sql().expect("b").0,
        r#"INSERT INTO "users" ("id") VALUES (2)"#
    );
    assert_eq!(
        base.to_sql().expect("base").0,
        r#"INSERT INTO "users" DEFAULT VALUES"#
    );
}
