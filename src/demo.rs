//! Bundled sample records for demo mode.
//!
//! Served only when `WidgetConfig::demo_mode` is on and the real fetch
//! failed; the controller flags the result `DataOrigin::Demo` and the
//! renderer labels it, so placeholder data is never mistaken for a live
//! record.

use async_trait::async_trait;

use crate::api::{ApiError, RecordSource};
use crate::types::{Company, Contact, ContactAnalytics, Deal};

/// Source of bundled sample records, one per record type.
pub struct DemoSource;

pub fn sample_contact() -> Contact {
    Contact {
        id: "demo-contact-001".into(),
        name: "Sarah Chen".into(),
        email: "sarah.chen@acmecorp.com".into(),
        phone: "+1 (555) 014-2231".into(),
        company: "Acme Corp".into(),
        engagement_score: 87,
        total_deals: 4,
        deal_value: 215_000,
        last_activity: "2 days ago".into(),
        harmony_analytics: ContactAnalytics {
            response_rate: 92,
            preferred_channel: "Email".into(),
            timezone: "America/New_York".into(),
        },
    }
}

pub fn sample_deal() -> Deal {
    Deal {
        id: "demo-deal-001".into(),
        name: "Acme Corp Expansion".into(),
        amount: 75_000,
        close_date: "2026-10-15".into(),
        stage: "Negotiation".into(),
        stage_color: "#2563eb".into(),
        probability: 65,
        expected_value: 48_750,
        next_action: "Send revised proposal by Friday".into(),
    }
}

pub fn sample_company() -> Company {
    Company {
        id: "demo-company-001".into(),
        name: "Acme Corp".into(),
        industry: "Manufacturing".into(),
        location: "Chicago, IL".into(),
        website: "https://acmecorp.example.com".into(),
        employee_count: 1_200,
        annual_revenue: 48_000_000,
        health_score: 74,
        total_deals: 12,
        active_contacts: 9,
        insights: vec![
            "Renewal conversation due in Q4".into(),
            "Product usage up 18% quarter over quarter".into(),
            "Two open deals stalled in Negotiation for 30+ days".into(),
        ],
    }
}

#[async_trait]
impl RecordSource<Contact> for DemoSource {
    async fn fetch(&self, _object_id: &str) -> Result<Contact, ApiError> {
        Ok(sample_contact())
    }
}

#[async_trait]
impl RecordSource<Deal> for DemoSource {
    async fn fetch(&self, _object_id: &str) -> Result<Deal, ApiError> {
        Ok(sample_deal())
    }
}

#[async_trait]
impl RecordSource<Company> for DemoSource {
    async fn fetch(&self, _object_id: &str) -> Result<Company, ApiError> {
        Ok(sample_company())
    }
}
