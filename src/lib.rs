//! Embeddable CRM insight widgets.
//!
//! Three read-only widgets — Contact Insights, Deal Pipeline, Company
//! Metrics — that fetch one record each from the Harmony backend and render
//! a business-intelligence summary. One generic fetch/controller/renderer
//! pipeline serves all three record types.
//!
//! ```no_run
//! use harmony_widgets::{WidgetConfig, WidgetRegistry};
//!
//! # async fn host() -> Result<(), harmony_widgets::ConfigError> {
//! let registry = WidgetRegistry::new(&WidgetConfig::default())?;
//! let widget = registry.mount_contact("contact-42");
//!
//! let mut states = widget.subscribe();
//! states.changed().await.ok();
//! let html = harmony_widgets::render::html::to_html(&widget.view());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod demo;
pub mod registry;
pub mod render;
pub mod types;
pub mod widget;

pub use api::{ApiError, RecordClient, RecordSource};
pub use config::{ConfigError, WidgetConfig};
pub use registry::WidgetRegistry;
pub use render::{render, Node, RecordView, ScoreTier};
pub use types::{ApiEnvelope, Company, Contact, ContactAnalytics, CrmRecord, Deal, RecordKind};
pub use widget::{DataOrigin, LoadState, Widget};
