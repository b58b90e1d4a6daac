use crate::dataset::{delete, insert, update};
use crate::dialect::PlaceholderStyle;
use crate::error::Error;
use crate::expression::helpers::eq;
use crate::expression::{Appendable, Record};
use crate::sql_builder::SqlBuilder;

#[test]
fn recorded_error_wins_over_rendering() {
    let d = insert("users")
        .set_error(Error::message("bad row data"))
        .rows([Record::new().set("name", "Bob")]);
    assert_eq!(d.to_sql(), Err(Error::message("bad row data")));
}

#[test]
fn first_recorded_error_is_kept() {
    let d = update("users")
        .set_error(Error::message("first"))
        .set_error(Error::message("second"))
        .set(Record::new().set("name", "x"));
    assert_eq!(d.to_sql(), Err(Error::message("first")));
}

#[test]
fn error_does_not_leak_into_branches_taken_earlier() {
    let clean = delete("users").where_(eq("id", 1_i64));
    let poisoned = clean.set_error(Error::message("boom"));
    assert!(clean.to_sql().is_ok());
    assert_eq!(poisoned.to_sql(), Err(Error::message("boom")));
}

#[test]
fn mutators_carry_the_error_forward_unchanged() {
    let d = update("users").set_error(Error::message("stale"));
    let derived = d
        .set(Record::new().set("name", "x"))
        .where_(eq("id", 1_i64))
        .limit(3);
    assert_eq!(derived.error(), Some(&Error::message("stale")));
    assert_eq!(derived.to_sql(), Err(Error::message("stale")));
}

#[test]
#[should_panic(expected = "boom")]
fn must_to_sql_panics_on_error() {
    let _ = delete("users").set_error(Error::message("boom")).must_to_sql();
}

#[test]
fn nested_error_poisons_the_outer_builder() {
    let inner = delete("users").set_error(Error::message("inner failed"));
    let mut b = SqlBuilder::new(false, PlaceholderStyle::Question);
    b.push("WITH x AS (");
    inner.append_sql(&mut b);
    b.push(")");
    assert_eq!(b.finish(), Err(Error::message("inner failed")));
}

#[test]
fn render_error_is_not_sticky_on_the_dataset() {
    let d = update("users").with_dialect("mysql").set(
        Record::new().set("name", "x"),
    );
    let failing = d.returning(["id"]);
    assert!(failing.to_sql().is_err());
    // the dataset itself stays clean; only the failing branch reports
    assert!(d.to_sql().is_ok());
    assert!(failing.error().is_none());
}
