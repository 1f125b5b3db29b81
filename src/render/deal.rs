//! Deal Pipeline view.

use crate::types::{Deal, RecordKind};

use super::format::{format_currency, format_percent};
use super::node::Node;
use super::tier::ScoreTier;
use super::RecordView;

impl RecordView for Deal {
    fn view(&self) -> Node {
        // Progress bar width is a direct linear function of probability.
        let probability = self.probability.min(100);

        Node::Panel {
            title: "Deal Pipeline".to_string(),
            children: vec![
                Node::Section {
                    title: "Deal Details".to_string(),
                    children: vec![
                        Node::row("Deal Name", self.name.clone()),
                        Node::row("Amount", format_currency(self.amount)),
                        Node::row("Close Date", self.close_date.clone()),
                        Node::ColoredBadge {
                            text: self.stage.clone(),
                            color: self.stage_color.clone(),
                        },
                    ],
                },
                Node::Section {
                    title: "Win Probability".to_string(),
                    children: vec![
                        Node::ScoreBadge {
                            label: "Win Probability".to_string(),
                            value: format_percent(self.probability),
                            tier: ScoreTier::from_score(self.probability),
                        },
                        Node::stat("Expected Value", format_currency(self.expected_value)),
                        Node::row("Next Action", self.next_action.clone()),
                    ],
                },
                Node::Progress {
                    label: format!("{}% likely to close", self.probability),
                    percent: probability,
                },
            ],
        }
    }

    fn skeleton() -> Node {
        Node::Skeleton {
            kind: RecordKind::Deal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Deal {
        Deal {
            id: "d1".into(),
            name: "Acme Expansion".into(),
            amount: 75_000,
            close_date: "2026-10-15".into(),
            stage: "Negotiation".into(),
            stage_color: "#2563eb".into(),
            probability: 65,
            expected_value: 48_750,
            next_action: "Send revised proposal".into(),
        }
    }

    #[test]
    fn test_progress_width_matches_probability() {
        let Node::Panel { children, .. } = sample().view() else {
            panic!("expected panel");
        };
        let progress = children
            .iter()
            .find_map(|n| match n {
                Node::Progress { percent, .. } => Some(*percent),
                _ => None,
            })
            .unwrap();
        assert_eq!(progress, 65);
    }

    #[test]
    fn test_progress_width_clamped_to_100() {
        let mut deal = sample();
        deal.probability = 140;
        let json = serde_json::to_value(deal.view()).unwrap();
        let progress = json["children"]
            .as_array()
            .unwrap()
            .iter()
            .find(|n| n["type"] == "progress")
            .unwrap();
        assert_eq!(progress["percent"], 100);
    }

    #[test]
    fn test_stage_badge_uses_backend_color() {
        let json = serde_json::to_string(&sample().view()).unwrap();
        assert!(json.contains("#2563eb"));
        assert!(json.contains("Negotiation"));
    }

    #[test]
    fn test_expected_value_is_rendered_not_derived() {
        // Backend sent an expected value inconsistent with amount × probability;
        // the widget renders what it got.
        let mut deal = sample();
        deal.expected_value = 99_999;
        let json = serde_json::to_string(&deal.view()).unwrap();
        assert!(json.contains("$99,999"));
    }
}
