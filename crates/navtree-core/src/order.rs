//! The member ordering used by the documentation generator.
//!
//! Entries within an index group are sorted case-insensitively, comparing
//! byte-by-byte after ASCII case folding. This is observable directly in
//! generated files: `LOG_TAG` sorts before `LOGD` (`_` < `d` after folding)
//! and `GL_COMPRESSED_RGBA_ASTC_10x10_KHR` sorts before
//! `GL_COMPRESSED_RGBA_ASTC_10x5_KHR` (`1` < `5`).

use std::cmp::Ordering;

/// Compare two member names under ASCII case folding.
///
/// Non-ASCII bytes are compared as-is; folding only affects `A`-`Z`.
/// Names that differ only in ASCII case compare as equal.
pub fn folded_cmp(lhs: &str, rhs: &str) -> Ordering {
    let lhs = lhs.bytes().map(|b| b.to_ascii_lowercase());
    let rhs = rhs.bytes().map(|b| b.to_ascii_lowercase());
    lhs.cmp(rhs)
}

/// Whether `next` may follow `prev` inside a single sorted group.
///
/// Equal names continue a group: overloaded functions legitimately repeat
/// a name with distinct anchors.
pub fn continues_run(prev: &str, next: &str) -> bool {
    folded_cmp(prev, next) != Ordering::Greater
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_underscore_before_letters() {
        // The sequence observed in generated indexes.
        assert_eq!(folded_cmp("LOG_TAG", "LOGD"), Ordering::Less);
        assert_eq!(folded_cmp("LOGD", "LOGE"), Ordering::Less);
        assert_eq!(folded_cmp("LOGI", "MALLOC_CHECK"), Ordering::Less);
    }

    #[test]
    fn test_digits_compare_bytewise() {
        assert_eq!(
            folded_cmp(
                "GL_COMPRESSED_RGBA_ASTC_10x10_KHR",
                "GL_COMPRESSED_RGBA_ASTC_10x5_KHR"
            ),
            Ordering::Less
        );
        assert_eq!(
            folded_cmp(
                "GL_COMPRESSED_RGBA_ASTC_12x12_KHR",
                "GL_COMPRESSED_RGBA_ASTC_4x4_KHR"
            ),
            Ordering::Less
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(folded_cmp("Texture_Set", "texture_set"), Ordering::Equal);
        assert_eq!(folded_cmp("ASTC", "astc_header"), Ordering::Less);
    }

    #[test]
    fn test_prefix_is_less() {
        assert_eq!(folded_cmp("texture_set", "texture_set_info"), Ordering::Less);
    }

    #[test]
    fn test_continues_run() {
        assert!(continues_run("create_program", "load_shader"));
        assert!(continues_run("load_shader", "LOAD_SHADER"));
        assert!(!continues_run("load_shader", "create_program"));
    }

    proptest! {
        #[test]
        fn prop_antisymmetric(a in ".*", b in ".*") {
            prop_assert_eq!(folded_cmp(&a, &b), folded_cmp(&b, &a).reverse());
        }

        #[test]
        fn prop_reflexive(a in ".*") {
            prop_assert_eq!(folded_cmp(&a, &a), Ordering::Equal);
        }

        #[test]
        fn prop_transitive(a in ".*", b in ".*", c in ".*") {
            let mut names = [a, b, c];
            names.sort_by(|x, y| folded_cmp(x, y));
            prop_assert_ne!(folded_cmp(&names[0], &names[2]), Ordering::Greater);
        }
    }
}
