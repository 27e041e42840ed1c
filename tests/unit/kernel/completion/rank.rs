use super::*;
use crate::kernel::services::ports::CompletionItemKind;

fn labels(items: &[CompletionItem]) -> Vec<&str> {
    items.iter().map(|item| item.label.as_str()).collect()
}

fn items(labels: &[&str]) -> Vec<CompletionItem> {
    labels.iter().map(|l| CompletionItem::new(*l)).collect()
}

#[test]
fn contiguous_matches_sort_by_key() {
    let ranked = rank(&items(&["foo", "xfoo", "fob"]), "fo");
    assert_eq!(labels(&ranked), ["fob", "foo"]);
}

#[test]
fn match_is_anchored_at_first_char() {
    let ranked = rank(&items(&["xfoo", "afo", "f_o"]), "fo");
    assert_eq!(labels(&ranked), ["f_o"]);
}

#[test]
fn contiguous_outranks_abbreviation() {
    let ranked = rank(&items(&["foo_bar", "fbx", "fb", "f_b"]), "fb");
    assert_eq!(labels(&ranked), ["fb", "fbx", "f_b", "foo_bar"]);
}

#[test]
fn contiguous_anywhere_in_key_counts() {
    // "fa_fb" starts with `f` and holds `fb` contiguously later on.
    let ranked = rank(&items(&["fxb", "fa_fb"]), "fb");
    assert_eq!(labels(&ranked), ["fa_fb", "fxb"]);
}

#[test]
fn empty_filter_text_falls_back_to_label() {
    let list = vec![CompletionItem::new("format")
        .with_filter_text("")
        .with_insert_text("")];
    let ranked = rank(&list, "fo");
    assert_eq!(labels(&ranked), ["format"]);
}

#[test]
fn filter_text_is_preferred_match_key() {
    let list = vec![
        CompletionItem::new("Display::fmt").with_filter_text("fmt"),
        CompletionItem::new("fmt_other").with_filter_text("other"),
        CompletionItem::new("fma"),
    ];
    let ranked = rank(&list, "fm");
    assert_eq!(labels(&ranked), ["fma", "Display::fmt"]);
}

#[test]
fn sort_text_breaks_remaining_ties() {
    let list = vec![
        CompletionItem::new("len")
            .with_kind(CompletionItemKind::Method)
            .with_sort_text("2"),
        CompletionItem::new("len")
            .with_kind(CompletionItemKind::Field)
            .with_sort_text("1"),
    ];
    let ranked = rank(&list, "le");
    assert_eq!(ranked[0].kind, Some(CompletionItemKind::Field));
    assert_eq!(ranked[1].kind, Some(CompletionItemKind::Method));
}

#[test]
fn missing_sort_text_orders_first() {
    let list = vec![
        CompletionItem::new("len")
            .with_kind(CompletionItemKind::Method)
            .with_sort_text("0"),
        CompletionItem::new("len").with_kind(CompletionItemKind::Field),
    ];
    let ranked = rank(&list, "le");
    assert_eq!(ranked[0].kind, Some(CompletionItemKind::Field));
}

#[test]
fn duplicates_differing_only_in_sort_text_collapse_to_first() {
    let list = vec![
        CompletionItem::new("push").with_sort_text("b"),
        CompletionItem::new("pop"),
        CompletionItem::new("push").with_sort_text("a"),
        CompletionItem::new("push").with_detail("other overload"),
    ];
    let ranked = rank(&list, "");
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].sort_text.as_deref(), Some("b"));
    assert_eq!(ranked[1].label, "pop");
    assert_eq!(ranked[2].detail.as_deref(), Some("other overload"));
}

#[test]
fn empty_prefix_keeps_input_order() {
    let list = items(&["zeta", "alpha", "mid"]);
    assert_eq!(labels(&rank(&list, "")), ["zeta", "alpha", "mid"]);
}

#[test]
fn ranking_is_idempotent() {
    let list = vec![
        CompletionItem::new("format").with_sort_text("3"),
        CompletionItem::new("f_o_r"),
        CompletionItem::new("for"),
        CompletionItem::new("format").with_sort_text("1"),
        CompletionItem::new("forget").with_kind(CompletionItemKind::Function),
        CompletionItem::new("bar"),
    ];
    let once = rank(&list, "for");
    let twice = rank(&once, "for");
    assert_eq!(once, twice);
    assert_eq!(labels(&once), ["for", "forget", "format", "f_o_r"]);
}

#[test]
fn ranking_is_case_sensitive() {
    assert!(rank(&items(&["Foo"]), "fo").is_empty());
}

#[test]
fn prefix_is_matched_literally() {
    let ranked = rank(&items(&["a.b", "axb", "a.xb"]), "a.b");
    assert_eq!(labels(&ranked), ["a.b", "a.xb"]);
}

#[test]
fn empty_batch_ranks_to_empty() {
    assert!(rank(&Vec::<CompletionItem>::new(), "x").is_empty());
    assert!(rank(&Vec::<CompletionItem>::new(), "").is_empty());
}

#[test]
fn rank_refs_points_into_input() {
    let list = items(&["bar", "baz"]);
    let ranked = rank_refs(&list, "ba");
    assert!(std::ptr::eq(ranked[0], &list[0]));
    assert!(std::ptr::eq(ranked[1], &list[1]));
}

#[test]
fn abbreviation_match_rules() {
    assert!(matches_abbreviation("foobar", ""));
    assert!(matches_abbreviation("foobar", "fbr"));
    assert!(matches_abbreviation("f", "f"));
    assert!(!matches_abbreviation("foobar", "fbz"));
    assert!(!matches_abbreviation("", "f"));
    assert!(!matches_abbreviation("barf", "f"));
    assert!(!matches_abbreviation("fo", "foo"));
}
