// Helper macro to distinguish between patterns and expressions
#[macro_export]
macro_rules! assert_case {
    // Guard patterns - patterns with if conditions
    ($result:expr, { $pattern:pat if $guard:expr }) => {
        match $result {
            $pattern if $guard => {},
            other => panic!("Expected {} if {} but got {:?}", stringify!($pattern), stringify!($guard), other),
        }
    };

    // Pattern matching cases - detect common pattern forms
    ($result:expr, { Ok($($pattern:tt)*) }) => {
        match $result {
            Ok($($pattern)*) => {},
            other => panic!("Expected Ok({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { Some($($pattern:tt)*) }) => {
        match $result {
            Some($($pattern)*) => {},
            other => panic!("Expected Some({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { None }) => {
        match $result {
            None => {},
            other => panic!("Expected None but got {:#?}", other),
        }
    };

    // Wildcard pattern
    ($result:expr, { _ }) => {
        let _ = $result;
    };

    // Default case - treat as expression for equality comparison
    ($result:expr, { $expected:expr }) => {
        pretty_assertions::assert_eq!($result, $expected, "\n\n< got / expected >");
    };
}

// Helper macro to generate test functions based on field names
#[macro_export]
macro_rules! handle_case {
    ([$($attrs:meta)*] result, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_result() {
            let (_list, result) = edited!();
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] contents, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_contents() {
            let (list, _result) = edited!();
            assert_case!(list.as_slice(), $expected);
        }
    };

    ([$($attrs:meta)*] count, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_count() {
            let (list, _result) = edited!();
            assert_case!(list.count(), $expected);
            assert!(list.count() <= list.capacity());
        }
    };

    ([$($attrs:meta)*] capacity, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_capacity() {
            let (list, _result) = edited!();
            assert_case!(list.capacity(), $expected);
        }
    };

    ([$($attrs:meta)*] error_message, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_error_message() {
            let (_list, result) = edited!();
            let err = match result {
                Err(e) => e,
                Ok(_) => panic!("Expected an error, but the edit succeeded"),
            };
            let err_string = err.to_string();
            assert_case!(err_string.as_str(), $expected);
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    // Parse assertion field with potential attributes
    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, input and edit second, then any order for assertions
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        edit: $edit:expr,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code, unused_macros)]

            use super::*;

            fn apply<T, R>(list: &mut arrlist::List<T>, edit: impl FnOnce(&mut arrlist::List<T>) -> R) -> R {
                edit(list)
            }

            // Builds a fresh list from `$input` and runs `$edit` on it.
            macro_rules! edited {
                () => {{
                    let mut list = arrlist::List::from($input);
                    let result = apply(&mut list, $edit);
                    (list, result)
                }};
            }

            // Generate all test functions
            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}
