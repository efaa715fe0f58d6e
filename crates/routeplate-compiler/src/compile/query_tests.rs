use super::augment;

#[test]
fn appends_query_expression() {
    assert_eq!(
        augment("/users/{id}", &["page", "per_page"]),
        "/users/{id}{?page,per_page}"
    );
}

#[test]
fn empty_names_leave_template_unchanged() {
    let names: [&str; 0] = [];
    assert_eq!(augment("/users/{id}", &names), "/users/{id}");
}

#[test]
fn single_name() {
    assert_eq!(augment("/search", &["q".to_string()]), "/search{?q}");
}

#[test]
fn names_are_not_deduplicated_or_escaped() {
    assert_eq!(augment("", &["a b", "a b"]), "{?a b,a b}");
}
