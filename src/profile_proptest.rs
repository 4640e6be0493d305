//! Property-based tests for profile name handling and path expansion.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::config::expand_path;
    use crate::profile::validate_name;
    use proptest::prelude::*;
    use std::path::Component;

    proptest! {
        /// Property: every name built from the allowed alphabet is accepted
        #[test]
        fn allowed_alphabet_is_accepted(name in "[a-zA-Z0-9_-]{1,40}") {
            prop_assert!(validate_name(&name).is_ok());
        }

        /// Property: a single forbidden character anywhere rejects the name
        #[test]
        fn forbidden_character_is_rejected(
            prefix in "[a-z0-9]{0,10}",
            bad in "[ ./\\\\:*?\"<>|~$]",
            suffix in "[a-z0-9]{0,10}",
        ) {
            let name = format!("{prefix}{bad}{suffix}");
            prop_assert!(validate_name(&name).is_err(), "accepted {:?}", name);
        }

        /// Property: an accepted name never escapes the profiles root
        #[test]
        fn accepted_names_stay_inside_root(name in ".{0,30}") {
            if validate_name(&name).is_ok() {
                let joined = std::path::Path::new("/root/profiles").join(&name);
                prop_assert_eq!(joined.parent(), Some(std::path::Path::new("/root/profiles")));
            }
        }

        /// Property: expanded absolute paths contain no `.` or `..` components
        #[test]
        fn expanded_absolute_paths_are_clean(parts in prop::collection::vec("[a-z]{1,5}|\\.|\\.\\.", 0..8)) {
            let raw = format!("/{}", parts.join("/"));
            let expanded = expand_path(&raw);
            for component in expanded.components() {
                prop_assert!(
                    !matches!(component, Component::CurDir | Component::ParentDir),
                    "{:?} expanded to {:?}",
                    raw,
                    expanded
                );
            }
        }
    }
}
