#![cfg(test)]

use crate::dialect::{DialectOptions, PlaceholderStyle};
use crate::expression::helpers::*;
use crate::expression::{Expression, Identifier, Record};
use crate::param::Param;
use crate::sql_builder::SqlBuilder;

fn render(e: &Expression, prepared: bool) -> crate::Result<(String, Vec<Param>)> {
    let opts = DialectOptions::default();
    let mut b = SqlBuilder::new(prepared, opts.placeholder);
    e.append_sql(&mut b, &opts);
    b.finish()
}

fn render_pg(e: &Expression) -> (String, Vec<Param>) {
    let opts = DialectOptions::postgres();
    let mut b = SqlBuilder::new(true, PlaceholderStyle::Numbered);
    e.append_sql(&mut b, &opts);
    b.finish().expect("render")
}

#[test]
fn identifier_parse_splits_on_dots() {
    let ident = Identifier::parse("public.users.id");
    assert_eq!(ident.parts().collect::<Vec<_>>(), ["public", "users", "id"]);
    assert_eq!(ident.last(), "id");
}

#[test]
fn identifier_quotes_each_part() {
    let (sql, _) = render(&col("public.users.id"), true).expect("render");
    assert_eq!(sql, "\"public\".\"users\".\"id\"");
}

#[test]
fn identifier_star_part_stays_unquoted() {
    let (sql, _) = render(&col("users.*"), true).expect("render");
    assert_eq!(sql, "\"users\".*");
}

#[test]
fn identifier_doubles_embedded_quotes() {
    let (sql, _) = render(&col(r#"we"ird"#), true).expect("render");
    assert_eq!(sql, r#""we""ird""#);
}

#[test]
fn eq_renders_placeholder_and_param() {
    let (sql, params) = render(&eq("id", 5), true).expect("render");
    assert_eq!(sql, "\"id\" = ?");
    assert_eq!(params, vec![Param::I64(5)]);
}

#[test]
fn eq_renders_literal_when_not_prepared() {
    let (sql, params) = render(&eq("name", "Bob"), false).expect("render");
    assert_eq!(sql, "\"name\" = 'Bob'");
    assert!(params.is_empty());
}

#[test]
fn in_list_numbers_placeholders() {
    let (sql, params) = render_pg(&in_list("id", [1, 2, 3]));
    assert_eq!(sql, "\"id\" IN ($1, $2, $3)");
    assert_eq!(params.len(), 3);
}

#[test]
fn empty_in_list_is_a_render_error() {
    let err = render(&in_list("id", Vec::<i64>::new()), true).unwrap_err();
    assert!(err.to_string().contains("IN list"));
}

#[test]
fn is_null_has_no_operand() {
    let (sql, params) = render(&is_null("deleted_at"), true).expect("render");
    assert_eq!(sql, "\"deleted_at\" IS NULL");
    assert!(params.is_empty());
}

#[test]
fn literal_interleaves_bound_args() {
    let (sql, params) = render_pg(&lit_args("price * ? + ?", [2, 10]));
    assert_eq!(sql, "price * $1 + $2");
    assert_eq!(params, vec![Param::I64(2), Param::I64(10)]);
}

#[test]
fn literal_slot_mismatch_is_a_render_error() {
    let err = render(&lit_args("a = ?", Vec::<i64>::new()), true).unwrap_err();
    assert!(err.to_string().contains("placeholder slots"));
}

#[test]
fn record_preserves_insertion_order() {
    let r = Record::new().set("b", 1).set("a", 2).set("c", 3);
    assert_eq!(r.columns().collect::<Vec<_>>(), ["b", "a", "c"]);
    assert!(r.get("a").is_some());
    assert!(r.get("missing").is_none());
}

#[test]
fn excluded_is_a_lowercase_qualified_identifier() {
    let (sql, _) = render(&excluded("name"), true).expect("render");
    assert_eq!(sql, "\"excluded\".\"name\"");
}
