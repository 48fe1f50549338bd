// Procedural surface suite.
//
// Mirrors how a caller that checks a boolean first and consults the last
// error afterwards drives the table:
// - Absent arguments: NullArgument, no mutation.
// - Failures: `false`/`None` return plus the matching ErrorKind.
// - Destructors: invoked once per value on delete/destroy when supplied.
use seeded_hashtable::api::{self, error_message, last_error};
use seeded_hashtable::{ErrorKind, HashTable};
use std::cell::Cell;

fn key(s: &str) -> Option<&[u8]> {
    Some(s.as_bytes())
}

#[test]
fn full_lifecycle_through_api() {
    let mut table = api::create::<Box<u32>>(20).ok();
    assert!(table.is_some());

    assert!(api::insert(table.as_mut(), key("key"), Some(Box::new(5))));
    assert_eq!(api::get(table.as_ref(), key("key")).map(|v| **v), Some(5));

    assert!(!api::insert(table.as_mut(), key("key"), Some(Box::new(6))));
    assert_eq!(last_error(), ErrorKind::DuplicateKey);
    assert_eq!(error_message(last_error()), "KEY ALREADY EXISTS");

    let freed = Cell::new(0u32);
    let free_fn: &mut dyn FnMut(Box<u32>) = &mut |v: Box<u32>| freed.set(freed.get() + *v);
    assert!(api::delete(table.as_mut(), key("key"), Some(free_fn)));
    assert_eq!(freed.get(), 5);
    assert_eq!(table.as_ref().map(HashTable::len), Some(0));

    assert_eq!(api::get(table.as_ref(), key("key")), None);
    assert_eq!(last_error(), ErrorKind::NotFound);

    api::destroy(table, None);
    assert_eq!(last_error(), ErrorKind::NoError);
}

#[test]
fn create_zero_reports_invalid_capacity() {
    assert!(api::create::<()>(0).is_err());
    assert_eq!(last_error(), ErrorKind::InvalidCapacity);
}

// Absent table or key never mutates anything.
#[test]
fn absent_arguments_do_not_mutate() {
    let mut table = api::create::<i32>(8).ok();
    assert!(api::insert(table.as_mut(), key("keep"), Some(1)));

    assert!(!api::insert(table.as_mut(), None, Some(2)));
    assert_eq!(last_error(), ErrorKind::NullArgument);
    assert!(!api::delete(table.as_mut(), None, None));
    assert_eq!(last_error(), ErrorKind::NullArgument);
    assert_eq!(api::get(table.as_ref(), None), None);
    assert_eq!(last_error(), ErrorKind::NullArgument);

    assert!(!api::insert::<i32>(None, key("other"), Some(3)));
    assert_eq!(last_error(), ErrorKind::NullArgument);
    assert_eq!(api::get::<i32>(None, key("keep")), None);
    assert_eq!(last_error(), ErrorKind::NullArgument);
    assert!(!api::delete::<i32>(None, key("keep"), None));
    assert_eq!(last_error(), ErrorKind::NullArgument);

    assert_eq!(table.as_ref().map(HashTable::len), Some(1));
    assert_eq!(api::get(table.as_ref(), key("keep")), Some(&1));
}

#[test]
fn empty_key_insert_is_null_argument() {
    let mut table = api::create::<i32>(8).ok();
    assert!(!api::insert(table.as_mut(), Some(&b""[..]), Some(1)));
    assert_eq!(last_error(), ErrorKind::NullArgument);
}

#[test]
fn destroy_runs_destructor_per_value() {
    let mut table = api::create::<u32>(2).ok();
    for (i, k) in ["a", "b", "c", "d"].iter().enumerate() {
        assert!(api::insert(table.as_mut(), key(k), Some(i as u32 + 1)));
    }
    let sum = Cell::new(0);
    let calls = Cell::new(0);
    let free_fn: &mut dyn FnMut(u32) = &mut |v: u32| {
        sum.set(sum.get() + v);
        calls.set(calls.get() + 1);
    };
    api::destroy(table, Some(free_fn));
    assert_eq!(calls.get(), 4);
    assert_eq!(sum.get(), 10);
}

#[test]
fn destroy_absent_table_is_noop() {
    api::destroy::<String>(None, None);
    assert_eq!(last_error(), ErrorKind::NoError);
}

#[test]
fn set_seed_then_use() {
    let mut table = api::create::<i32>(16).ok();
    api::set_seed(table.as_mut(), 0x5eed);
    assert_eq!(last_error(), ErrorKind::NoError);
    assert!(api::insert(table.as_mut(), key("k"), Some(1)));
    assert_eq!(api::get(table.as_ref(), key("k")), Some(&1));
    assert_eq!(table.as_ref().map(HashTable::seed), Some(0x5eed));

    api::set_seed::<i32>(None, 1);
    assert_eq!(last_error(), ErrorKind::NullArgument);
}
