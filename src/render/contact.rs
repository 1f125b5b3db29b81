//! Contact Insights view.

use crate::types::{Contact, RecordKind};

use super::format::{format_count, format_currency, format_percent};
use super::node::Node;
use super::tier::ScoreTier;
use super::RecordView;

impl RecordView for Contact {
    fn view(&self) -> Node {
        Node::Panel {
            title: "Contact Insights".to_string(),
            children: vec![
                Node::Section {
                    title: "Contact Information".to_string(),
                    children: vec![
                        Node::row("Name", self.name.clone()),
                        Node::row("Email", self.email.clone()),
                        Node::row("Phone", self.phone.clone()),
                        Node::row("Company", self.company.clone()),
                    ],
                },
                Node::Section {
                    title: "Engagement Metrics".to_string(),
                    children: vec![
                        Node::ScoreBadge {
                            label: "Engagement Score".to_string(),
                            value: format_percent(self.engagement_score),
                            tier: ScoreTier::from_score(self.engagement_score),
                        },
                        Node::row("Total Deals", format_count(self.total_deals)),
                        Node::row("Deal Value", format_currency(self.deal_value)),
                        Node::row("Last Activity", self.last_activity.clone()),
                    ],
                },
                Node::Section {
                    title: "Harmony Analytics".to_string(),
                    children: vec![
                        Node::stat(
                            "Response Rate",
                            format_percent(self.harmony_analytics.response_rate),
                        ),
                        Node::stat(
                            "Preferred Channel",
                            self.harmony_analytics.preferred_channel.clone(),
                        ),
                        Node::stat("Timezone", self.harmony_analytics.timezone.clone()),
                    ],
                },
            ],
        }
    }

    fn skeleton() -> Node {
        Node::Skeleton {
            kind: RecordKind::Contact,
        }
    }
}
