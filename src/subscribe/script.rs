pub const VALIDATE_SCRIPT_SRC: &str = "//s3.amazonaws.com/downloads.mailchimp.com/js/mc-validate.js";
pub const VALIDATE_SCRIPT_SELECTOR: &str = r#"script[src*="mc-validate.js"]"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeField {
    pub name: &'static str,
    pub kind: &'static str,
}

pub const MERGE_FIELDS: [MergeField; 3] = [
    MergeField {
        name: "EMAIL",
        kind: "email",
    },
    MergeField {
        name: "FNAME",
        kind: "text",
    },
    MergeField {
        name: "LNAME",
        kind: "text",
    },
];

pub trait ScriptHost {
    fn has_script(&self, selector: &str) -> bool;
    fn attach_script(&mut self, src: &str);
    fn register_fields(&mut self, fields: &[MergeField]);
}

/// Page-wide init-once: the page is the registry, checked before insert.
/// Returns `true` only for the call that attached.
pub fn ensure_loaded<H: ScriptHost + ?Sized>(host: &mut H) -> bool {
    if host.has_script(VALIDATE_SCRIPT_SELECTOR) {
        return false;
    }
    host.attach_script(VALIDATE_SCRIPT_SRC);
    host.register_fields(&MERGE_FIELDS);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakePage {
        scripts: Vec<String>,
        fnames: Vec<String>,
        ftypes: Vec<String>,
    }

    impl ScriptHost for FakePage {
        fn has_script(&self, selector: &str) -> bool {
            assert_eq!(selector, VALIDATE_SCRIPT_SELECTOR);
            self.scripts.iter().any(|s| s.contains("mc-validate.js"))
        }

        fn attach_script(&mut self, src: &str) {
            self.scripts.push(src.to_string());
        }

        fn register_fields(&mut self, fields: &[MergeField]) {
            self.fnames = fields.iter().map(|f| f.name.to_string()).collect();
            self.ftypes = fields.iter().map(|f| f.kind.to_string()).collect();
        }
    }

    #[test]
    fn test_attaches_once_across_mounts() {
        let mut page = FakePage::default();
        assert!(ensure_loaded(&mut page));
        assert!(!ensure_loaded(&mut page));
        assert_eq!(page.scripts, vec![VALIDATE_SCRIPT_SRC.to_string()]);
    }

    #[test]
    fn test_registers_merge_fields() {
        let mut page = FakePage::default();
        ensure_loaded(&mut page);
        assert_eq!(page.fnames, vec!["EMAIL", "FNAME", "LNAME"]);
        assert_eq!(page.ftypes, vec!["email", "text", "text"]);
    }

    #[test]
    fn test_existing_script_left_alone() {
        let mut page = FakePage {
            scripts: vec!["https://cdn.example.com/mc-validate.js".to_string()],
            ..Default::default()
        };
        assert!(!ensure_loaded(&mut page));
        assert_eq!(page.scripts.len(), 1);
        assert!(page.fnames.is_empty());
    }
}
