//! OR-branch splitting.

use std::sync::LazyLock;

use regex_lite::Regex;

/// `- OR -` separates mutually exclusive options inside one effect line.
static OR_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)- OR -").expect("valid OR marker pattern"));

/// Splits an effect line into its options. Text without a marker is a single option.
pub fn split_branches(text: &str) -> Vec<&str> {
    OR_SPLIT.split(text).collect()
}

/// Number of options in an effect line (at least 1).
pub fn branch_count(text: &str) -> usize {
    OR_SPLIT.split(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_case_insensitively() {
        let text = "5.00% to Blast Defense - or - 5.00% to Strike Defense";
        assert_eq!(
            split_branches(text),
            vec!["5.00% to Blast Defense ", " 5.00% to Strike Defense"]
        );
        assert_eq!(branch_count(text), 2);
    }

    #[test]
    fn plain_text_is_one_branch() {
        assert_eq!(split_branches("Critical+5%"), vec!["Critical+5%"]);
        assert_eq!(branch_count(""), 1);
        assert_eq!(branch_count("Strike Attack+5% - ORB -"), 1);
    }
}
