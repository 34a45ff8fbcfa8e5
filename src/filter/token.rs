/// Build the compact label summarizing a filter's value set
///
/// The first value stands for the whole set, with a trailing ellipsis when
/// more values are present. Callers should never pass an empty slice; if
/// they do, a placeholder dash is returned rather than failing.
pub fn make_token(values: &[String]) -> String {
    let Some(first) = values.first() else {
        return "–".to_string();
    };
    if values.len() > 1 {
        format!("{first}…")
    } else {
        first.clone()
    }
}
