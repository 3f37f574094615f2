/// A bound of zero (or unset) disables its rule; it can never fail.
pub(crate) fn active_limit(limit: Option<usize>) -> Option<usize> {
    limit.filter(|&n| n > 0)
}

/// Count characters matching `pred`, codepoint by codepoint.
pub(crate) fn count_chars(password: &str, pred: impl Fn(char) -> bool) -> usize {
    password.chars().filter(|&c| pred(c)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_none_both_disable() {
        assert_eq!(active_limit(None), None);
        assert_eq!(active_limit(Some(0)), None);
        assert_eq!(active_limit(Some(3)), Some(3));
    }

    #[test]
    fn counting_is_codepoint_aware() {
        assert_eq!(count_chars("a1б2", |c| c.is_ascii_digit()), 2);
        assert_eq!(count_chars("a1б2", |c| !c.is_ascii()), 1);
    }
}
