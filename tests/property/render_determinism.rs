//! Property-based tests for determinism and totality of rendering

use kvcli::cli::{classify, hash_pairs, list, members, render, scan_result};
use kvcli::reply::Reply;
use proptest::prelude::*;

/// Arbitrary reply shapes, including nested arrays up to depth 3.
fn reply_strategy() -> impl Strategy<Value = Reply> {
    let leaf = prop_oneof![
        Just(Reply::Nil),
        any::<i64>().prop_map(Reply::Int),
        ".*".prop_map(Reply::Str),
        ".*".prop_map(Reply::Error),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(Reply::Array)
    })
}

/// Test that rendering identical inputs always produces identical output
#[test]
fn test_render_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(".{0,16}", reply_strategy()), |(command, reply)| {
            let first = render(&command, reply.clone(), None);
            let second = render(&command, reply, None);
            assert_eq!(first, second);
            Ok(())
        })
        .unwrap();
}

/// Test that every formatter is total: any reply shape yields text, never a panic
#[test]
fn test_formatters_total_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&reply_strategy(), |reply| {
            let _ = list(&reply);
            let _ = hash_pairs(&reply);
            let _ = members(&reply);
            let _ = scan_result(&reply);
            Ok(())
        })
        .unwrap();
}

/// Test that classification ignores case and surrounding whitespace
#[test]
fn test_classify_normalization_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&"[a-zA-Z]{1,12}", |name| {
            let padded = format!("  {}  ", name);
            assert_eq!(classify(&name), classify(&padded));
            assert_eq!(classify(&name), classify(&name.to_ascii_lowercase()));
            assert_eq!(classify(&name), classify(&name.to_ascii_uppercase()));
            Ok(())
        })
        .unwrap();
}

/// Test that list output always has one line per element
#[test]
fn test_list_line_count_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec("[a-z0-9]{0,8}", 0..20),
            |items| {
                let reply = Reply::Array(items.iter().map(|s| Reply::from(s.as_str())).collect());
                let out = list(&reply);
                assert_eq!(out.matches('\n').count(), items.len());
                Ok(())
            },
        )
        .unwrap();
}
