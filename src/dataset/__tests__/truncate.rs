use crate::dataset::truncate;
use crate::dialect::PlaceholderStyle;
use crate::error::Error;
use crate::expression::helpers::val;
use crate::expression::Appendable;
use crate::sql_builder::SqlBuilder;

#[test]
fn single_table() {
    let (sql, params) = truncate(["users"]).to_sql().expect("render");
    assert_eq!(sql, r#"TRUNCATE "users""#);
    assert!(params.is_empty());
}

#[test]
fn option_order_is_fixed_regardless_of_call_order() {
    let a = truncate(["users"]).cascade().identity("restart");
    let b = truncate(["users"]).identity("restart").cascade();
    let expected = r#"TRUNCATE "users" CASCADE RESTART IDENTITY"#;
    assert_eq!(a.to_sql().expect("a").0, expected);
    assert_eq!(b.to_sql().expect("b").0, expected);
}

#[test]
fn restrict_and_continue_identity() {
    let d = truncate(["users"]).restrict().identity("continue");
    let (sql, _) = d.to_sql().expect("render");
    assert_eq!(sql, r#"TRUNCATE "users" RESTRICT CONTINUE IDENTITY"#);
}

#[test]
fn no_cascade_and_no_restrict_clear_the_flags() {
    let d = truncate(["users"])
        .cascade()
        .restrict()
        .no_cascade()
        .no_restrict();
    let (sql, _) = d.to_sql().expect("render");
    assert_eq!(sql, r#"TRUNCATE "users""#);

    let d = truncate(["users"]).cascade().no_cascade().restrict();
    let (sql, _) = d.to_sql().expect("render");
    assert_eq!(sql, r#"TRUNCATE "users" RESTRICT"#);
}

#[test]
fn appends_into_an_external_builder() {
    let mut b = SqlBuilder::new(false, PlaceholderStyle::Question);
    truncate(["users"]).cascade().append_sql(&mut b);
    let (sql, _) = b.finish().expect("render");
    assert_eq!(sql, r#"TRUNCATE "users" CASCADE"#);

    let mut b = SqlBuilder::new(false, PlaceholderStyle::Question);
    truncate(["users"])
        .set_error(Error::message("stale"))
        .append_sql(&mut b);
    assert_eq!(b.finish(), Err(Error::message("stale")));
}

#[test]
fn multiple_tables_keep_argument_order() {
    let d = truncate(["users", "accounts.billing"]);
    let (sql, _) = d.to_sql().expect("render");
    assert_eq!(sql, r#"TRUNCATE "users", "accounts"."billing""#);
}

#[test]
fn unsupported_on_sqlite() {
    let d = truncate(["users"]).with_dialect("sqlite");
    assert!(matches!(
        d.to_sql(),
        Err(Error::UnsupportedFeature { .. })
    ));
}

#[test]
#[should_panic(expected = "unsupported table argument")]
fn value_in_table_list_panics() {
    let _ = truncate([val(1_i64)]);
}
