//! Host-agnostic display tree.
//!
//! Widgets render to `Node` values rather than markup so hosts can map the
//! tree onto whatever their surface supports; `render::html` provides a
//! ready-made HTML serialization for plain embedding. The tree serializes
//! to tagged JSON for script hosts.

use serde::Serialize;

use crate::types::RecordKind;

use super::tier::ScoreTier;

/// One element of a widget's display tree.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    /// Outer card of a widget.
    Panel {
        title: String,
        children: Vec<Node>,
    },
    /// Titled group of rows/stats inside a panel.
    Section {
        title: String,
        children: Vec<Node>,
    },
    /// Label/value pair.
    Row { label: String, value: String },
    /// Emphasized metric.
    Stat { label: String, value: String },
    /// Score pill with its tier color and icon.
    ScoreBadge {
        label: String,
        value: String,
        tier: ScoreTier,
    },
    /// Pill with a backend-supplied color (deal stages).
    ColoredBadge { text: String, color: String },
    /// Hyperlink (company websites).
    Link { label: String, href: String },
    /// Linear progress bar; width is the percent, 0–100.
    Progress { label: String, percent: u32 },
    /// Ordered free-text items (company insights).
    List { title: String, items: Vec<String> },
    /// Notice that the view shows demo data, not a live record.
    DemoNotice,
    /// Placeholder shown while a record loads, shaped per record type.
    Skeleton { kind: RecordKind },
    /// Failure panel; `can_retry` tells the host to offer a retry control.
    ErrorPanel { message: String, can_retry: bool },
}

impl Node {
    /// Convenience for label/value rows.
    pub fn row(label: &str, value: impl Into<String>) -> Node {
        Node::Row {
            label: label.to_string(),
            value: value.into(),
        }
    }

    /// Convenience for stat entries.
    pub fn stat(label: &str, value: impl Into<String>) -> Node {
        Node::Stat {
            label: label.to_string(),
            value: value.into(),
        }
    }
}
