//! End-to-end rendering coverage: dispatch through `render` plus the
//! standalone composite formatters the client calls directly.

use kvcli::cli::{hash_pairs, members, render, scan_result, Rendered};
use kvcli::error::ClientError;
use kvcli::reply::Reply;

fn text(result: Result<Rendered, kvcli::cli::RenderedError>) -> String {
    match result.unwrap() {
        Rendered::Text(s) => s,
        Rendered::Raw(other) => panic!("expected formatted text, got pass-through: {:?}", other),
    }
}

#[test]
fn test_simple_string_commands() {
    assert_eq!(text(render("SET", Reply::from("OK"), None)), "OK");
    assert_eq!(text(render("FLUSHDB", Reply::Nil, None)), "(nil)");
    assert_eq!(text(render("rename", Reply::from("OK"), None)), "OK");
}

#[test]
fn test_integer_commands() {
    assert_eq!(text(render("DEL", Reply::Int(2), None)), "(integer) 2");
    assert_eq!(text(render("TTL", Reply::Int(-1), None)), "(integer) -1");
    assert_eq!(text(render("EXISTS", Reply::Nil, None)), "(nil)");
    assert_eq!(
        text(render("INCR", Reply::from("not a number"), None)),
        "(error) invalid type"
    );
}

#[test]
fn test_bulk_string_commands() {
    assert_eq!(text(render("GET", Reply::from("value"), None)), "value");
    assert_eq!(text(render("GET", Reply::Nil, None)), "(nil)");
    // Integer payloads under bulk rendering delegate to the integer form.
    assert_eq!(text(render("GETRANGE", Reply::Int(7), None)), "(integer) 7");
}

#[test]
fn test_list_commands() {
    let reply = Reply::Array(vec![Reply::from("a"), Reply::Int(2), Reply::Nil]);
    assert_eq!(
        text(render("KEYS", reply, None)),
        "1) \"a\"\n2) \"2\"\n3) (nil)\n"
    );
    assert_eq!(text(render("MGET", Reply::Array(vec![]), None)), "");
    assert_eq!(
        text(render("HKEYS", Reply::Int(1), None)),
        "(error) invalid type"
    );
}

#[test]
fn test_unknown_command_passes_reply_through() {
    let reply = Reply::Array(vec![Reply::from("channel"), Reply::Int(1)]);
    let result = render("SUBSCRIBE", reply.clone(), None).unwrap();
    assert_eq!(result, Rendered::Raw(reply));
}

#[test]
fn test_execution_error_supersedes_result() {
    let err = ClientError::Server("WRONGTYPE Operation against a key".to_string());
    let result = render("GET", Reply::from("ignored"), Some(err));
    let rendered = result.unwrap_err();
    assert_eq!(
        rendered.to_string(),
        "(error) WRONGTYPE Operation against a key"
    );
}

#[test]
fn test_execution_error_without_server_message() {
    let err = ClientError::Protocol("unexpected reply byte".to_string());
    let rendered = render("GET", Reply::Nil, Some(err)).unwrap_err();
    assert_eq!(
        rendered.to_string(),
        "(error) protocol error: unexpected reply byte"
    );
}

#[test]
fn test_command_name_normalization_is_consistent() {
    let variants = ["GET", "get", "  get  ", "GeT"];
    let outputs: Vec<String> = variants
        .iter()
        .map(|name| text(render(name, Reply::from("v"), None)))
        .collect();
    assert!(outputs.iter().all(|o| o == "v"));
}

#[test]
fn test_hash_pairs_standalone_for_hgetall() {
    let reply = Reply::Array(vec![
        Reply::from("f1"),
        Reply::from("v1"),
        Reply::from("f2"),
        Reply::from("v2"),
    ]);
    assert_eq!(hash_pairs(&reply), "1) f1\n   v1\n2) f2\n   v2\n");
    assert_eq!(hash_pairs(&Reply::Array(vec![])), "(empty list or set)");
    assert_eq!(
        hash_pairs(&Reply::Array(vec![
            Reply::from("f1"),
            Reply::from("v1"),
            Reply::from("orphan"),
        ])),
        "(error) invalid hash pair format"
    );
}

#[test]
fn test_members_standalone_for_smembers() {
    let reply = Reply::Array(vec![Reply::from("one"), Reply::from("two")]);
    assert_eq!(members(&reply), "1) one\n2) two\n");
}

#[test]
fn test_scan_result_composes_hash_pairs() {
    let reply = Reply::Array(vec![
        Reply::from("10"),
        Reply::Array(vec![Reply::from("f1"), Reply::from("v1")]),
    ]);
    assert_eq!(scan_result(&reply), "(cursor) 10\n1) f1\n   v1\n");
}

#[test]
fn test_rendering_is_deterministic() {
    let reply = Reply::Array(vec![Reply::from("a"), Reply::Nil, Reply::Int(3)]);
    let first = render("KEYS", reply.clone(), None);
    let second = render("KEYS", reply, None);
    assert_eq!(first, second);
}
