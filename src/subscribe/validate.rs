use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

/// Empty counts as acceptable so a cleared field shows no error.
pub fn is_acceptable_email(candidate: &str) -> bool {
    candidate.is_empty() || EMAIL_PATTERN.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen};

    #[derive(Clone, Debug)]
    struct Segment(String);

    impl Arbitrary for Segment {
        fn arbitrary(g: &mut Gen) -> Self {
            let len = usize::arbitrary(g) % 12 + 1;
            let s = (0..len)
                .map(|_| {
                    let c = char::arbitrary(g);
                    if c.is_whitespace() || c == '@' {
                        'x'
                    } else {
                        c
                    }
                })
                .collect();
            Self(s)
        }
    }

    #[quickcheck_macros::quickcheck]
    fn test_well_formed_addresses_accepted(local: Segment, domain: Segment, tld: Segment) -> bool {
        is_acceptable_email(&format!("{}@{}.{}", local.0, domain.0, tld.0))
    }

    #[quickcheck_macros::quickcheck]
    fn test_whitespace_rejected(local: Segment, domain: Segment, at: usize) -> bool {
        let mut email: Vec<char> = format!("{}@{}.com", local.0, domain.0).chars().collect();
        let at = at % (email.len() + 1);
        email.insert(at, ' ');
        !is_acceptable_email(&email.into_iter().collect::<String>())
    }

    #[quickcheck_macros::quickcheck]
    fn test_second_at_rejected(local: Segment, domain: Segment, at: usize) -> bool {
        let mut email: Vec<char> = format!("{}@{}.com", local.0, domain.0).chars().collect();
        let at = at % (email.len() + 1);
        email.insert(at, '@');
        !is_acceptable_email(&email.into_iter().collect::<String>())
    }

    #[test]
    fn test_empty_is_acceptable() {
        assert!(is_acceptable_email(""));
    }

    #[test]
    fn test_common_shapes() {
        assert!(is_acceptable_email("a@b.c"));
        assert!(is_acceptable_email("bob@x.com"));
        assert!(is_acceptable_email("first.last@mail.example.co.uk"));

        assert!(!is_acceptable_email("bob"));
        assert!(!is_acceptable_email("bob@"));
        assert!(!is_acceptable_email("bob@x"));
        assert!(!is_acceptable_email("@x.com"));
        assert!(!is_acceptable_email("bob@.com"));
        assert!(!is_acceptable_email("bob@x."));
        assert!(!is_acceptable_email("bob@x.com\n"));
        assert!(!is_acceptable_email(" bob@x.com"));
        assert!(!is_acceptable_email("bob@@x.com"));
    }
}
