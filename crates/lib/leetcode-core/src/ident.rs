//! Problem identifier helpers for local problem folders.
//!
//! Problem folders are named `<prefix>_<identifier>` where the identifier uses
//! `__` for a decimal point and `_` for spaces, e.g. `0017_Interview_17__01`.

use std::path::Path;

/// Converts a problem folder name into the display identifier LeetCode uses.
///
/// Replacements run in a fixed order: the prefix up to the first `_` is
/// dropped, `__` becomes `.`, the remaining `_` become spaces, and then the
/// `JZ_Offer` and `Interview` aliases are expanded. Because underscores are
/// already gone by the time `JZ_Offer` is checked, that alias never matches.
#[must_use]
pub fn folder_name_to_problem_id(folder_name: &str) -> String {
    let question_id = folder_name
        .split_once('_')
        .map_or(folder_name, |(_, rest)| rest);
    question_id
        .replace("__", ".")
        .replace('_', " ")
        .replace("JZ_Offer", "剑指Offer")
        .replace("Interview", "面试题")
}

/// Derives the problem identifier from the directory that holds `file_path`.
///
/// Paths without a named parent directory produce an empty identifier.
#[must_use]
pub fn problem_id_from_path(file_path: &str) -> String {
    let folder_name = Path::new(file_path)
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    folder_name_to_problem_id(&folder_name)
}

/// Returns the directory holding `file_path`, used to look up cached problem files.
#[must_use]
pub fn problem_dir(file_path: &str) -> &Path {
    Path::new(file_path).parent().unwrap_or_else(|| Path::new(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix_and_spaces_words() {
        assert_eq!(folder_name_to_problem_id("1_Two_Sum"), "Two Sum");
    }

    #[test]
    fn double_underscore_becomes_decimal_point() {
        assert_eq!(folder_name_to_problem_id("面试题_17__01"), "17.01");
    }

    #[test]
    fn expands_interview_alias() {
        assert_eq!(
            folder_name_to_problem_id("0017_Interview_17__01"),
            "面试题 17.01"
        );
    }

    #[test]
    fn jz_offer_alias_never_fires_after_space_replacement() {
        assert_eq!(folder_name_to_problem_id("0003_JZ_Offer_03"), "JZ Offer 03");
    }

    #[test]
    fn name_without_separator_is_kept() {
        assert_eq!(folder_name_to_problem_id("42"), "42");
        assert_eq!(folder_name_to_problem_id(""), "");
    }

    #[test]
    fn normalized_output_is_a_fixed_point() {
        for folder in ["1_Two_Sum", "0001_1", "面试题_17__01", "0017_Interview_17__01"] {
            let once = folder_name_to_problem_id(folder);
            assert_eq!(folder_name_to_problem_id(&once), once, "folder {folder}");
        }
    }

    #[test]
    fn problem_id_uses_parent_directory_name() {
        assert_eq!(
            problem_id_from_path("/work/leetcode/0001_1/solution.rs"),
            "1"
        );
        assert_eq!(problem_id_from_path("solution.rs"), "");
    }

    #[test]
    fn problem_dir_is_parent_directory() {
        assert_eq!(
            problem_dir("/work/leetcode/0001_1/solution.rs"),
            Path::new("/work/leetcode/0001_1")
        );
    }
}
