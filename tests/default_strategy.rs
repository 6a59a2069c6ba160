// Exercises the process-wide surface with no strategy registered, so the
// built-in snake_case transform handles every property. Kept in its own
// test binary: registration elsewhere would leak into this process.

use pretty_assertions::assert_eq;
use sqlcase_core::{to_column_name, to_database_name, to_table_name};

#[test]
fn test_default_naming_strategy() {
    let cases: &[(&str, fn(&str) -> String, &str)] = &[
        ("auth", to_database_name, "auth"),
        ("userRestrictions", to_table_name, "user_restrictions"),
        ("clientID", to_column_name, "client_id"),
    ];

    for &(name, namer, expected) in cases {
        assert_eq!(namer(name), expected, "renaming {:?}", name);
    }
}
