//! Tag filtering for backends that forward structured tags.

use statline_core::Tags;

use super::allowlist::{ListValidator, PatternBlockListValidator};

/// Turns a [`Tags`] set into the `key:value` list a tag-aware client expects.
#[derive(Debug, Clone, Default)]
pub struct TagPolicy {
    enabled: bool,
    key_filter: PatternBlockListValidator,
}

impl TagPolicy {
    pub fn new(enabled: bool, disabled_keys: &[String]) -> Self {
        Self {
            enabled,
            key_filter: PatternBlockListValidator::new(disabled_keys),
        }
    }

    /// Tags are silently ignored when disabled. Keys on the block list are
    /// skipped; tags whose key or value holds `,` or `=` are dropped with an
    /// error log.
    pub fn prepare(&self, tags: Option<&Tags>) -> Vec<String> {
        let Some(tags) = tags else {
            return Vec::new();
        };
        if !self.enabled {
            return Vec::new();
        }
        tags.iter()
            .filter(|(k, _)| self.key_filter.test(k))
            .filter(|(k, v)| {
                let ok = !k.contains([',', '=']) && !v.contains([',', '=']);
                if !ok {
                    tracing::error!(key = %k, value = %v, "dropping invalid tag");
                }
                ok
            })
            .map(|(k, v)| format!("{k}:{v}"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_policy_drops_all() {
        let p = TagPolicy::new(false, &[]);
        let tags = Tags::from_pairs(&[("a", "1")]);
        assert!(p.prepare(Some(&tags)).is_empty());
    }

    #[test]
    fn renders_sorted_key_value() {
        let p = TagPolicy::new(true, &[]);
        let tags = Tags::from_pairs(&[("queue", "q1"), ("dag_id", "etl")]);
        assert_eq!(p.prepare(Some(&tags)), vec!["dag_id:etl", "queue:q1"]);
    }

    #[test]
    fn filters_blocked_and_malformed() {
        let p = TagPolicy::new(true, &["run_".to_string()]);
        let tags = Tags::from_pairs(&[
            ("run_id", "r-1"),
            ("bad", "x=y"),
            ("also,bad", "v"),
            ("ok", "fine"),
        ]);
        assert_eq!(p.prepare(Some(&tags)), vec!["ok:fine"]);
        assert!(p.prepare(None).is_empty());
    }
}
