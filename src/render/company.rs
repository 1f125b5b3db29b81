//! Company Metrics view.

use crate::types::{Company, RecordKind};

use super::format::{format_count, format_currency, format_percent};
use super::node::Node;
use super::tier::ScoreTier;
use super::RecordView;

impl RecordView for Company {
    fn view(&self) -> Node {
        let health_tier = ScoreTier::from_score(self.health_score);

        Node::Panel {
            title: "Company Metrics".to_string(),
            children: vec![
                Node::Section {
                    title: "Company Information".to_string(),
                    children: vec![
                        Node::row("Company Name", self.name.clone()),
                        Node::row("Industry", self.industry.clone()),
                        Node::row("Location", self.location.clone()),
                        Node::Link {
                            label: "Website".to_string(),
                            href: self.website.clone(),
                        },
                    ],
                },
                Node::Section {
                    title: "Business Metrics".to_string(),
                    children: vec![
                        Node::row("Employees", format_count(self.employee_count)),
                        Node::row("Annual Revenue", format_currency(self.annual_revenue)),
                        Node::ScoreBadge {
                            label: format!("Health Score {}", health_tier.icon()),
                            value: format_percent(self.health_score),
                            tier: health_tier,
                        },
                    ],
                },
                Node::Section {
                    title: "CRM Activity".to_string(),
                    children: vec![
                        Node::stat("Total Deals", format_count(self.total_deals)),
                        Node::stat("Active Contacts", format_count(self.active_contacts)),
                    ],
                },
                Node::List {
                    title: "Business Intelligence Insights".to_string(),
                    items: self.insights.clone(),
                },
            ],
        }
    }

    fn skeleton() -> Node {
        Node::Skeleton {
            kind: RecordKind::Company,
        }
    }
}
