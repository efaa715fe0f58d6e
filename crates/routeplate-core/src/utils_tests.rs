use crate::utils::strip_decorations;

#[test]
fn strips_leading_colon() {
    assert_eq!(strip_decorations(":id"), "id");
}

#[test]
fn strips_splat_marker() {
    assert_eq!(strip_decorations("*path"), "path");
}

#[test]
fn strips_decorations_anywhere() {
    assert_eq!(strip_decorations("a:b*c"), "abc");
}

#[test]
fn decoration_only_name_becomes_empty() {
    assert_eq!(strip_decorations("*:"), "");
}
