use routeplate_core::PathNode;

use super::{CompileError, CompileOptions, compile_path};
use crate::test_utils::{group, lit, path, splat, sym, users_show};

fn compile(node: &PathNode) -> String {
    compile_path(node, &CompileOptions::default()).unwrap()
}

fn compile_all_names(node: &PathNode) -> String {
    let options = CompileOptions::new().with_ignore(Vec::<String>::new());
    compile_path(node, &options).unwrap()
}

// ----------------------------------------------------------------------------
// Terminals
// ----------------------------------------------------------------------------

#[test]
fn literal_is_emitted_verbatim() {
    assert_eq!(compile(&lit("users")), "users");
    assert_eq!(compile(&lit("")), "");
}

#[test]
fn separators_emit_their_text() {
    assert_eq!(compile(&PathNode::Slash), "/");
    assert_eq!(compile(&PathNode::Dot), ".");
}

#[test]
fn format_is_ignored_by_default() {
    assert_eq!(compile(&sym("format")), "");
    assert_eq!(compile(&sym(":format")), "");
}

#[test]
fn symbol_without_ignored_names() {
    assert_eq!(compile_all_names(&sym("id")), "{id}");
    assert_eq!(compile_all_names(&sym("format")), "{format}");
}

#[test]
fn symbol_decorations_are_stripped() {
    assert_eq!(compile(&sym(":id")), "{id}");
    assert_eq!(compile(&sym("*path")), "{path}");
}

#[test]
fn decoration_only_symbol_yields_empty_name() {
    assert_eq!(compile(&sym("*:")), "{}");
}

#[test]
fn custom_ignore_list() {
    let options = CompileOptions::new().ignore_name("locale");
    let node = PathNode::cat(
        PathNode::cat(PathNode::Slash, sym(":locale")),
        PathNode::cat(PathNode::Slash, sym(":id")),
    );
    assert_eq!(compile_path(&node, &options).unwrap(), "/{id}");
}

// ----------------------------------------------------------------------------
// Separator + placeholder
// ----------------------------------------------------------------------------

#[test]
fn slash_symbol_outside_group_keeps_literal_separator() {
    let node = PathNode::cat(PathNode::Slash, sym("id"));
    assert_eq!(compile(&node), "/{id}");
}

#[test]
fn dot_symbol_outside_group_keeps_literal_separator() {
    let node = PathNode::cat(PathNode::Dot, sym(":format"));
    assert_eq!(compile_all_names(&node), ".{format}");
}

#[test]
fn slash_symbol_inside_group_absorbs_separator() {
    let node = group(PathNode::cat(PathNode::Slash, sym(":id")));
    assert_eq!(compile(&node), "{/id}");
}

#[test]
fn dot_symbol_inside_group_absorbs_separator() {
    let node = group(PathNode::cat(PathNode::Dot, sym("format")));
    assert_eq!(compile_all_names(&node), "{.format}");
}

#[test]
fn group_context_is_distinct_from_plain_context() {
    let inside = group(PathNode::cat(PathNode::Slash, sym(":id")));
    let outside = PathNode::cat(PathNode::Slash, sym(":id"));
    assert_ne!(compile(&inside), compile(&outside));
}

#[test]
fn ignored_symbol_inside_group_leaves_nothing() {
    let node = group(PathNode::cat(PathNode::Slash, sym("format")));
    assert_eq!(compile(&node), "");
}

#[test]
fn ignored_symbol_outside_group_drops_separator() {
    let node = PathNode::cat(PathNode::Slash, sym(":format"));
    assert_eq!(compile(&node), "");
}

#[test]
fn group_context_applies_to_direct_child_cat_only() {
    // (x/:id): the inner Cat's parent is a Cat, not the Group.
    let node = group(path([lit("x"), PathNode::Slash, sym(":id")]));
    assert_eq!(compile(&node), "x/{id}");
}

#[test]
fn optional_format_suffix() {
    assert_eq!(compile(&users_show()), "/users/{id}");
    assert_eq!(compile_all_names(&users_show()), "/users/{id}{.format}");
}

#[test]
fn optional_trailing_segments() {
    // /posts(/page/:page)
    let node = path([
        PathNode::Slash,
        lit("posts"),
        group(path([PathNode::Slash, lit("page"), PathNode::Slash, sym(":page")])),
    ]);
    assert_eq!(compile(&node), "/posts/page/{page}");
}

// ----------------------------------------------------------------------------
// Splats
// ----------------------------------------------------------------------------

#[test]
fn slash_star_is_a_splat() {
    let node = PathNode::cat(PathNode::Slash, splat("*path"));
    assert_eq!(compile(&node), "{/path*}");
}

#[test]
fn slash_star_ignores_group_context() {
    let node = group(PathNode::cat(PathNode::Slash, splat("*path")));
    assert_eq!(compile(&node), "{/path*}");
}

#[test]
fn splat_at_end_of_route() {
    let node = path([PathNode::Slash, lit("files"), PathNode::Slash, splat("*path")]);
    assert_eq!(compile(&node), "/files{/path*}");
}

#[test]
fn splat_followed_by_more_pattern() {
    let node = PathNode::cat(
        PathNode::Slash,
        PathNode::cat(splat("*path"), lit("/edit")),
    );
    assert_eq!(compile(&node), "{/path*}/edit");
}

#[test]
fn splat_followed_by_optional_format() {
    // /*path(.:format)
    let node = PathNode::cat(
        PathNode::Slash,
        PathNode::cat(
            splat("*path"),
            group(PathNode::cat(PathNode::Dot, sym(":format"))),
        ),
    );
    assert_eq!(compile(&node), "{/path*}");
    assert_eq!(compile_all_names(&node), "{/path*}{.format}");
}

#[test]
fn slash_cat_without_splat_concatenates() {
    let node = PathNode::cat(PathNode::Slash, PathNode::cat(lit("a"), lit("b")));
    assert_eq!(compile(&node), "/ab");
}

#[test]
fn cat_star_strips_trailing_slashes() {
    let head = path([PathNode::Slash, lit("files"), PathNode::Slash]);
    let node = PathNode::cat(head, splat("*rest"));
    assert_eq!(compile(&node), "/files{/rest*}");

    let head = path([lit("files"), PathNode::Slash, PathNode::Slash]);
    let node = PathNode::cat(head, splat("*rest"));
    assert_eq!(compile(&node), "files{/rest*}");
}

#[test]
fn ignored_splat_compiles_to_nothing() {
    let options = CompileOptions::new().ignore_name("path");
    let node = PathNode::cat(PathNode::Slash, splat("*path"));
    assert_eq!(compile_path(&node, &options).unwrap(), "");
}

#[test]
fn bare_star_delegates_to_symbol() {
    assert_eq!(compile(&splat("*path")), "{path}");
}

// ----------------------------------------------------------------------------
// Alternation
// ----------------------------------------------------------------------------

#[test]
fn or_concatenates_branches_in_order() {
    let node = PathNode::or([lit("a"), PathNode::cat(PathNode::Slash, sym(":b"))]);
    assert_eq!(compile(&node), "a/{b}");
}

#[test]
fn empty_or_is_empty() {
    assert_eq!(compile(&PathNode::Or(vec![])), "");
}

// ----------------------------------------------------------------------------
// Group nesting
// ----------------------------------------------------------------------------

#[test]
fn directly_nested_groups_fail() {
    let node = group(group(lit("x")));
    let err = compile_path(&node, &CompileOptions::default()).unwrap_err();
    assert_eq!(
        err,
        CompileError::NestedGroups {
            pattern: "(x)".to_string()
        }
    );
}

#[test]
fn indirectly_nested_groups_fail() {
    // /a(/b(/c))
    let node = path([
        PathNode::Slash,
        lit("a"),
        group(path([
            PathNode::Slash,
            lit("b"),
            group(path([PathNode::Slash, lit("c")])),
        ])),
    ]);
    let err = compile_path(&node, &CompileOptions::default()).unwrap_err();
    assert!(matches!(err, CompileError::NestedGroups { .. }));
    assert_eq!(err.to_string(), "nested groups not permitted: `(/c)`");
}

#[test]
fn nested_group_under_or_fails() {
    let node = group(PathNode::or([lit("a"), group(lit("b"))]));
    assert!(compile_path(&node, &CompileOptions::default()).is_err());
}

#[test]
fn sibling_groups_compile() {
    let node = PathNode::cat(
        group(PathNode::cat(PathNode::Slash, sym(":a"))),
        group(PathNode::cat(PathNode::Dot, sym(":b"))),
    );
    assert_eq!(compile(&node), "{/a}{.b}");
}

#[test]
fn failure_does_not_affect_later_compiles() {
    let bad = group(group(lit("x")));
    assert!(compile_path(&bad, &CompileOptions::default()).is_err());
    assert_eq!(compile(&users_show()), "/users/{id}");
}

// ----------------------------------------------------------------------------
// Determinism
// ----------------------------------------------------------------------------

#[test]
fn compiling_twice_is_identical() {
    let options = CompileOptions::default();
    let first = compile_path(&users_show(), &options).unwrap();
    let second = compile_path(&users_show(), &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn long_routes_compile() {
    let mut nodes = Vec::new();
    for i in 0..200 {
        nodes.push(PathNode::Slash);
        nodes.push(sym(&format!(":p{i}")));
    }
    let node = PathNode::cat_all(nodes).unwrap();

    let out = compile(&node);
    assert!(out.starts_with("/{p0}/{p1}"));
    assert!(out.ends_with("/{p199}"));
}
