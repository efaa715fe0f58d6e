//! Query augmenter: appends an RFC 6570 form-style query expression.

/// Append `{?a,b,...}` to a path template.
///
/// Names are used as given: the registry that supplies them is responsible
/// for uniqueness and validity. An empty list leaves the template untouched.
pub fn augment<S: AsRef<str>>(path: &str, names: &[S]) -> String {
    if names.is_empty() {
        return path.to_owned();
    }

    let names_len: usize = names.iter().map(|n| n.as_ref().len() + 1).sum();
    let mut out = String::with_capacity(path.len() + names_len + 2);
    out.push_str(path);
    out.push_str("{?");
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(name.as_ref());
    }
    out.push('}');
    out
}
