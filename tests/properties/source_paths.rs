//! Property tests for source classification and output path derivation.

use std::path::PathBuf;

use proptest::prelude::*;

use stylewatch::{classify, derive_output_path, SourceKind};

fn segment() -> impl Strategy<Value = String> {
    // Directory names may themselves contain the source suffixes.
    prop_oneof![
        proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap(),
        proptest::string::string_regex("[a-z]{1,6}\\.(scss|js6|css)").unwrap(),
    ]
}

fn stem() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_.-]{0,16}").unwrap()
}

fn dirs() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(segment(), 0..=4)
}

fn join(dirs: &[String], file: &str) -> PathBuf {
    let mut path = PathBuf::new();
    for d in dirs {
        path.push(d);
    }
    path.push(file);
    path
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every `.scss` path is a style source whose output only swaps the suffix.
    #[test]
    fn property_style_suffix_law(dirs in dirs(), stem in stem()) {
        let path = join(&dirs, &format!("{stem}.scss"));

        prop_assert_eq!(classify(&path), SourceKind::Style);
        let output = derive_output_path(&path, SourceKind::Style).unwrap();
        prop_assert_eq!(output, join(&dirs, &format!("{stem}.css")));
    }

    /// PROPERTY: every `.js6` path is a script source whose output only swaps the suffix.
    #[test]
    fn property_script_suffix_law(dirs in dirs(), stem in stem()) {
        let path = join(&dirs, &format!("{stem}.js6"));

        prop_assert_eq!(classify(&path), SourceKind::Script);
        let output = derive_output_path(&path, SourceKind::Script).unwrap();
        prop_assert_eq!(output, join(&dirs, &format!("{stem}.js")));
    }

    /// PROPERTY: directory components are never rewritten.
    #[test]
    fn property_parent_is_preserved(dirs in dirs(), stem in stem()) {
        let path = join(&dirs, &format!("{stem}.scss"));
        let output = derive_output_path(&path, SourceKind::Style).unwrap();
        prop_assert_eq!(output.parent(), path.parent());
    }

    /// PROPERTY: anything not ending in a source suffix is unrelated and has no output.
    #[test]
    fn property_other_paths_are_unrelated(
        dirs in dirs(),
        name in proptest::string::string_regex("[A-Za-z0-9_.-]{1,20}").unwrap()
            .prop_filter("not a source", |n| {
                !n.ends_with(".scss") && !n.ends_with(".js6") && n != "." && n != ".."
            }),
    ) {
        let path = join(&dirs, &name);

        prop_assert_eq!(classify(&path), SourceKind::Unrelated);
        prop_assert!(derive_output_path(&path, SourceKind::Unrelated).is_none());
    }
}
