use std::borrow::Cow;

pub(crate) const DELIMITER: char = ',';
const QUOTE: char = '"';
const SINGLE_QUOTE: char = '\'';

/// Escapes a single header or field value.
///
/// Every whitespace character (as defined by [`char::is_whitespace`]) becomes
/// one ASCII space, so a field never spans several lines. If the result then
/// contains a comma, a double quote or a single quote, double quotes are
/// doubled and the whole field is wrapped in double quotes. A missing value
/// renders as an empty field.
///
/// # Examples
///
/// ```
/// use tabular_csv::item::csv::escape::escape_field;
///
/// assert_eq!(escape_field(Some("plain")), "plain");
/// assert_eq!(escape_field(Some("a,b")), "\"a,b\"");
/// assert_eq!(escape_field(Some("a\"b")), "\"a\"\"b\"");
/// assert_eq!(escape_field(Some("can't")), "\"can't\"");
/// assert_eq!(escape_field(Some("a\tb")), "a b");
/// assert_eq!(escape_field(None), "");
/// ```
pub fn escape_field(field: Option<&str>) -> Cow<'_, str> {
    let Some(field) = field else {
        return Cow::Borrowed("");
    };

    let field = if field.contains(char::is_whitespace) {
        Cow::Owned(
            field
                .chars()
                .map(|c| if c.is_whitespace() { ' ' } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(field)
    };

    if !field.contains([DELIMITER, QUOTE, SINGLE_QUOTE]) {
        return field;
    }

    let mut quoted = String::with_capacity(field.len() + 2);
    quoted.push(QUOTE);
    for c in field.chars() {
        if c == QUOTE {
            quoted.push(QUOTE);
        }
        quoted.push(c);
    }
    quoted.push(QUOTE);

    Cow::Owned(quoted)
}
