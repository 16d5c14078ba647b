use serde::{Deserialize, Serialize};

use crate::core::{ChartSpec, structurally_equal_maps, structurally_equal_seqs};

use super::RebuildReason;

/// Which halves of a spec differ between two render passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecChanges {
    pub data: bool,
    pub layout: bool,
}

impl SpecChanges {
    #[must_use]
    pub fn any(self) -> bool {
        self.data || self.layout
    }

    #[must_use]
    pub fn rebuild_reason(self) -> Option<RebuildReason> {
        match (self.data, self.layout) {
            (true, true) => Some(RebuildReason::DataAndLayout),
            (true, false) => Some(RebuildReason::Data),
            (false, true) => Some(RebuildReason::Layout),
            (false, false) => None,
        }
    }
}

/// Structural change detection between the rendered spec and an incoming one.
pub struct ChangeGate;

impl ChangeGate {
    #[must_use]
    pub fn changed(previous: &ChartSpec, next: &ChartSpec) -> bool {
        Self::data_changed(previous, next) || Self::layout_changed(previous, next)
    }

    #[must_use]
    pub fn compare(previous: &ChartSpec, next: &ChartSpec) -> SpecChanges {
        SpecChanges {
            data: Self::data_changed(previous, next),
            layout: Self::layout_changed(previous, next),
        }
    }

    #[must_use]
    pub fn data_changed(previous: &ChartSpec, next: &ChartSpec) -> bool {
        !structurally_equal_seqs(&previous.data, &next.data)
    }

    #[must_use]
    pub fn layout_changed(previous: &ChartSpec, next: &ChartSpec) -> bool {
        !structurally_equal_maps(&previous.layout, &next.layout)
    }

    /// Same as `changed`, treating an absent spec as the empty spec.
    #[must_use]
    pub fn changed_opt(previous: Option<&ChartSpec>, next: Option<&ChartSpec>) -> bool {
        let empty = ChartSpec::default();
        Self::changed(previous.unwrap_or(&empty), next.unwrap_or(&empty))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ChangeGate, SpecChanges};
    use crate::api::RebuildReason;
    use crate::core::ChartSpec;

    fn spec(data: serde_json::Value, layout: serde_json::Value) -> ChartSpec {
        ChartSpec::from_values(data, layout).expect("valid spec")
    }

    #[test]
    fn absent_spec_matches_empty_spec() {
        let empty = spec(json!([]), json!({}));
        assert!(!ChangeGate::changed_opt(None, Some(&empty)));
        assert!(!ChangeGate::changed_opt(None, None));
        assert!(ChangeGate::changed_opt(None, Some(&spec(json!([{}]), json!({})))));
    }

    #[test]
    fn rebuild_reason_reflects_changed_halves() {
        let base = spec(json!([{"x": [1]}]), json!({"title": "a"}));
        let both = spec(json!([{"x": [2]}]), json!({"title": "b"}));
        let changes = ChangeGate::compare(&base, &both);
        assert_eq!(changes, SpecChanges { data: true, layout: true });
        assert_eq!(changes.rebuild_reason(), Some(RebuildReason::DataAndLayout));
        assert_eq!(ChangeGate::compare(&base, &base).rebuild_reason(), None);
    }
}
