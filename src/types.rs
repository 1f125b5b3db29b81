//! Record shapes returned by the Harmony backend.
//!
//! Field names mirror the backend JSON (camelCase). Records are plain
//! immutable data: widgets never mutate them, only replace them wholesale on
//! each successful fetch. All derived fields (engagement score, probability,
//! expected value) are supplied by the backend, never computed here.

use serde::{Deserialize, Serialize};

/// Which CRM record type a widget displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Contact,
    Deal,
    Company,
}

impl RecordKind {
    /// Endpoint path segment appended to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            RecordKind::Contact => "/contacts",
            RecordKind::Deal => "/deals",
            RecordKind::Company => "/companies",
        }
    }

    /// Lowercase label used in user-facing messages ("No deal data available").
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Contact => "contact",
            RecordKind::Deal => "deal",
            RecordKind::Company => "company",
        }
    }
}

/// Marker for types fetchable from the backend as one record per identifier.
pub trait CrmRecord:
    serde::de::DeserializeOwned + Serialize + Clone + Send + Sync + 'static
{
    const KIND: RecordKind;
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

/// A CRM contact with engagement metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub engagement_score: u32,
    #[serde(default)]
    pub total_deals: u64,
    #[serde(default)]
    pub deal_value: i64,
    #[serde(default)]
    pub last_activity: String,
    // Spelling matches the backend payload.
    #[serde(default, rename = "harmonayAnalytics")]
    pub harmony_analytics: ContactAnalytics,
}

/// Nested analytics block on a contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactAnalytics {
    #[serde(default)]
    pub response_rate: u32,
    #[serde(default)]
    pub preferred_channel: String,
    #[serde(default)]
    pub timezone: String,
}

impl CrmRecord for Contact {
    const KIND: RecordKind = RecordKind::Contact;
}

// ---------------------------------------------------------------------------
// Deal
// ---------------------------------------------------------------------------

/// A CRM deal with probability scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub close_date: String,
    #[serde(default)]
    pub stage: String,
    /// Display color for the stage pill, e.g. "#2563eb". Backend-chosen.
    #[serde(default)]
    pub stage_color: String,
    #[serde(default)]
    pub probability: u32,
    /// Supplied by the backend; nominally amount × probability / 100, but the
    /// widget renders whatever the backend sends.
    #[serde(default)]
    pub expected_value: i64,
    #[serde(default)]
    pub next_action: String,
}

impl CrmRecord for Deal {
    const KIND: RecordKind = RecordKind::Deal;
}

// ---------------------------------------------------------------------------
// Company
// ---------------------------------------------------------------------------

/// A CRM company with health metrics and free-text insights.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub employee_count: u64,
    #[serde(default)]
    pub annual_revenue: i64,
    #[serde(default)]
    pub health_score: u32,
    #[serde(default)]
    pub total_deals: u64,
    #[serde(default)]
    pub active_contacts: u64,
    #[serde(default)]
    pub insights: Vec<String>,
}

impl CrmRecord for Company {
    const KIND: RecordKind = RecordKind::Company;
}

// ---------------------------------------------------------------------------
// API envelope
// ---------------------------------------------------------------------------

/// Wire envelope around every backend response.
///
/// `data` is absent or null on failures and on successful-but-empty lookups.
/// `error` should be present when `success` is false but callers must
/// tolerate its absence.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_deserialization() {
        let json = r#"{
            "id": "contact-001",
            "name": "Sarah Chen",
            "email": "sarah.chen@acme.com",
            "phone": "+1 (555) 014-2231",
            "company": "Acme Corp",
            "engagementScore": 87,
            "totalDeals": 4,
            "dealValue": 215000,
            "lastActivity": "2 days ago",
            "harmonayAnalytics": {
                "responseRate": 92,
                "preferredChannel": "Email",
                "timezone": "America/New_York"
            }
        }"#;

        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.name, "Sarah Chen");
        assert_eq!(contact.engagement_score, 87);
        assert_eq!(contact.harmony_analytics.response_rate, 92);
        assert_eq!(contact.harmony_analytics.preferred_channel, "Email");
    }

    #[test]
    fn test_contact_missing_fields_default() {
        // Backend omits fields it has no value for; everything defaults.
        let contact: Contact = serde_json::from_str(r#"{"id": "c1"}"#).unwrap();
        assert_eq!(contact.id, "c1");
        assert_eq!(contact.engagement_score, 0);
        assert!(contact.harmony_analytics.timezone.is_empty());
    }

    #[test]
    fn test_deal_deserialization() {
        let json = r##"{
            "id": "deal-001",
            "name": "Acme Expansion",
            "amount": 75000,
            "closeDate": "2026-10-15",
            "stage": "Negotiation",
            "stageColor": "#2563eb",
            "probability": 65,
            "expectedValue": 48750,
            "nextAction": "Send revised proposal"
        }"##;

        let deal: Deal = serde_json::from_str(json).unwrap();
        assert_eq!(deal.amount, 75000);
        assert_eq!(deal.probability, 65);
        assert_eq!(deal.stage_color, "#2563eb");
    }

    #[test]
    fn test_company_deserialization() {
        let json = r#"{
            "id": "company-001",
            "name": "Acme Corp",
            "industry": "Manufacturing",
            "location": "Chicago, IL",
            "website": "https://acme.example.com",
            "employeeCount": 1200,
            "annualRevenue": 48000000,
            "healthScore": 74,
            "totalDeals": 12,
            "activeContacts": 9,
            "insights": ["Renewal due in Q4", "Usage up 18% QoQ"]
        }"#;

        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.employee_count, 1200);
        assert_eq!(company.insights.len(), 2);
    }

    #[test]
    fn test_envelope_success_with_data() {
        let json = r#"{"success": true, "data": {"id": "c1", "name": "A"}}"#;
        let env: ApiEnvelope<Contact> = serde_json::from_str(json).unwrap();
        assert!(env.success);
        assert_eq!(env.data.unwrap().id, "c1");
        assert!(env.error.is_none());
    }

    #[test]
    fn test_envelope_failure_without_error_field() {
        let json = r#"{"success": false}"#;
        let env: ApiEnvelope<Contact> = serde_json::from_str(json).unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert!(env.error.is_none());
    }

    #[test]
    fn test_envelope_success_with_null_data() {
        let json = r#"{"success": true, "data": null}"#;
        let env: ApiEnvelope<Deal> = serde_json::from_str(json).unwrap();
        assert!(env.success);
        assert!(env.data.is_none());
    }

    #[test]
    fn test_envelope_payload_needs_no_default() {
        // The payload type only has to be Deserialize; missing `data` and
        // `error` deserialize to None on their own.
        #[derive(Debug, Deserialize)]
        struct Bare {
            id: String,
        }

        let env: ApiEnvelope<Bare> =
            serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(env.data.is_none());

        let env: ApiEnvelope<Bare> =
            serde_json::from_str(r#"{"success": true, "data": {"id": "x"}}"#).unwrap();
        assert_eq!(env.data.unwrap().id, "x");
    }

    #[test]
    fn test_record_kind_paths() {
        assert_eq!(RecordKind::Contact.path(), "/contacts");
        assert_eq!(RecordKind::Deal.path(), "/deals");
        assert_eq!(RecordKind::Company.path(), "/companies");
    }
}
