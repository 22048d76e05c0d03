use crate::rules::RuleOutcome;
use consentgate_types::PurposeId;

/// Denied purposes gathered during one evaluation pass.
///
/// Always created fresh by the call that fills it and returned by value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvaluationReport {
    pub denied_strict_purposes: Vec<PurposeId>,
    pub denied_flexible_purposes: Vec<PurposeId>,
    pub purposes_without_signal: Vec<PurposeId>,
}

impl EvaluationReport {
    pub fn record_strict(&mut self, outcome: &RuleOutcome) {
        push_unique(&mut self.denied_strict_purposes, &outcome.denied);
    }

    pub fn record_flexible(&mut self, outcome: &RuleOutcome) {
        push_unique(&mut self.denied_flexible_purposes, &outcome.denied);
        push_unique(&mut self.purposes_without_signal, &outcome.without_signal);
    }

    /// Append another pass's results, keeping first-seen order and dropping repeats.
    pub fn merge(&mut self, other: &EvaluationReport) {
        push_unique(
            &mut self.denied_strict_purposes,
            &other.denied_strict_purposes,
        );
        push_unique(
            &mut self.denied_flexible_purposes,
            &other.denied_flexible_purposes,
        );
        push_unique(
            &mut self.purposes_without_signal,
            &other.purposes_without_signal,
        );
    }

    pub fn is_clean(&self) -> bool {
        self.denied_strict_purposes.is_empty()
            && self.denied_flexible_purposes.is_empty()
            && self.purposes_without_signal.is_empty()
    }
}

fn push_unique(dst: &mut Vec<PurposeId>, src: &[PurposeId]) {
    for id in src {
        if !dst.contains(id) {
            dst.push(*id);
        }
    }
}

/// A gating decision and the diagnostics of the pass that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub allowed: bool,
    pub report: EvaluationReport,
}

#[cfg(test)]
mod tests {
    use super::*;
    use PurposeId::*;

    #[test]
    fn merge_keeps_first_seen_order_without_duplicates() {
        let mut a = EvaluationReport {
            denied_strict_purposes: vec![StoreAccessInformation],
            denied_flexible_purposes: vec![MeasureAdPerformance],
            purposes_without_signal: Vec::new(),
        };
        let b = EvaluationReport {
            denied_strict_purposes: vec![
                StoreAccessInformation,
                CreatePersonalisedAdsProfile,
                SelectPersonalisedAds,
            ],
            denied_flexible_purposes: vec![SelectBasicAds, MeasureAdPerformance],
            purposes_without_signal: vec![SelectBasicAds],
        };

        a.merge(&b);

        assert_eq!(
            a.denied_strict_purposes,
            vec![
                StoreAccessInformation,
                CreatePersonalisedAdsProfile,
                SelectPersonalisedAds
            ]
        );
        assert_eq!(
            a.denied_flexible_purposes,
            vec![MeasureAdPerformance, SelectBasicAds]
        );
        assert_eq!(a.purposes_without_signal, vec![SelectBasicAds]);
        assert!(!a.is_clean());
        assert!(EvaluationReport::default().is_clean());
    }
}
