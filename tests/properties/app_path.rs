//! Property tests for application path normalization.

use proptest::prelude::*;

use redeploy::{AppPath, PathRejection};

fn path_like() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._\\\\/-]{1,48}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: normalization never panics on arbitrary input.
    #[test]
    fn property_normalize_never_panics(s in "(?s).{0,256}") {
        let _ = AppPath::normalize(&s);
    }

    /// PROPERTY: normalized paths use forward slashes and end with one.
    #[test]
    fn property_normalized_shape(s in path_like()) {
        let path = AppPath::normalize(&s).unwrap();
        prop_assert!(!path.as_str().contains('\\'));
        prop_assert!(path.as_str().ends_with('/'));
    }

    /// PROPERTY: normalizing twice changes nothing.
    #[test]
    fn property_normalize_idempotent(s in path_like()) {
        let once = AppPath::normalize(&s).unwrap();
        let twice = AppPath::normalize(once.as_str()).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: only the separator style and the trailing slash change.
    #[test]
    fn property_normalize_preserves_content(s in path_like()) {
        let path = AppPath::normalize(&s).unwrap();
        let expected = s.replace('\\', "/");
        prop_assert_eq!(path.as_str().trim_end_matches('/'), expected.trim_end_matches('/'));
    }
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(AppPath::normalize(""), Err(PathRejection::Empty));
}
