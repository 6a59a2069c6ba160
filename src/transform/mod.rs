pub mod initialisms;

pub use initialisms::replace_initialisms;

/// Convert a camelCase/PascalCase identifier to snake_case
/// "userRestrictions" → "user_restrictions"
/// "clientID"         → "client_id"
/// "HTTPServer"       → "http_server"
///
/// Runs of consecutive uppercase letters stay one word unless followed by a
/// lowercase letter, and digits attached to an uppercase run do not split.
pub fn to_snake_case(name: &str) -> String {
    let value: Vec<char> = replace_initialisms(name).chars().collect();
    if value.is_empty() {
        return String::new();
    }

    let mut buf = String::with_capacity(value.len() + 4);
    let mut last_upper = false;
    let mut curr_upper = false;

    // Scan every character except the last; the final character is appended
    // verbatim and never evaluated as a boundary.
    for i in 0..value.len() - 1 {
        let next_upper = value[i + 1].is_ascii_uppercase();
        let next_digit = value[i + 1].is_ascii_digit();

        if i > 0 {
            if curr_upper {
                if last_upper && (next_upper || next_digit) {
                    // continues an acronym/digit run
                    buf.push(value[i]);
                } else {
                    if value[i - 1] != '_' && value[i + 1] != '_' {
                        buf.push('_');
                    }
                    buf.push(value[i]);
                }
            } else {
                buf.push(value[i]);
                // a word ending right before a capitalized word that starts
                // at the very end of the string
                if i == value.len() - 2 && next_upper && !next_digit {
                    buf.push('_');
                }
            }
        } else {
            curr_upper = true;
            buf.push(value[i]);
        }

        last_upper = curr_upper;
        curr_upper = next_upper;
    }

    buf.push(value[value.len() - 1]);
    buf.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_word() {
        assert_eq!(to_snake_case("auth"), "auth");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(to_snake_case("userRestrictions"), "user_restrictions");
    }

    #[test]
    fn test_trailing_initialism() {
        assert_eq!(to_snake_case("clientID"), "client_id");
    }

    #[test]
    fn test_leading_acronym_run() {
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
    }

    #[test]
    fn test_initialism_only() {
        assert_eq!(to_snake_case("ID"), "id");
    }

    #[test]
    fn test_mid_word_initialism() {
        assert_eq!(to_snake_case("parseJSONBody"), "parse_json_body");
        assert_eq!(to_snake_case("ParseURLError"), "parse_url_error");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_single_char() {
        assert_eq!(to_snake_case("A"), "a");
        assert_eq!(to_snake_case("a"), "a");
    }

    #[test]
    fn test_digits_stay_attached() {
        assert_eq!(to_snake_case("UTF8"), "utf8");
        assert_eq!(to_snake_case("Field2"), "field2");
    }

    #[test]
    fn test_existing_underscores_not_doubled() {
        assert_eq!(to_snake_case("user_ID"), "user_id");
    }

    #[test]
    fn test_snake_case_is_a_fixed_point() {
        for s in ["auth", "user_restrictions", "client_id", "http_server", "order_items"] {
            assert_eq!(to_snake_case(s), s);
        }
    }
}
