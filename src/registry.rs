//! Explicit widget registration.
//!
//! The host integration layer constructs one `WidgetRegistry` from a config
//! and mints widget instances from it. Nothing attaches to a shared namespace
//! as an import-time side effect; lifecycle stays with the caller. All
//! widgets from one registry share a single HTTP client.

use std::sync::Arc;

use crate::api::{RecordClient, RecordSource};
use crate::config::{ConfigError, WidgetConfig};
use crate::demo::DemoSource;
use crate::render::RecordView;
use crate::types::{Company, Contact, Deal};
use crate::widget::Widget;

pub struct WidgetRegistry {
    client: Arc<RecordClient>,
    demo_mode: bool,
}

impl WidgetRegistry {
    /// Build a registry from a validated config.
    pub fn new(config: &WidgetConfig) -> Result<Self, ConfigError> {
        let base_url = config.parsed_base_url()?;
        log::info!(
            "widget registry ready (base {}, demo mode {})",
            base_url,
            config.demo_mode
        );
        Ok(Self {
            client: Arc::new(RecordClient::new(base_url)),
            demo_mode: config.demo_mode,
        })
    }

    /// Registry using loaded configuration (file/env/defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(&WidgetConfig::load()?)
    }

    /// Mount a widget of any record type for `object_id`. The widget starts
    /// loading immediately.
    pub fn mount<R>(&self, object_id: impl Into<String>) -> Widget<R>
    where
        R: RecordView,
        DemoSource: RecordSource<R>,
    {
        let source: Arc<dyn RecordSource<R>> = self.client.clone();
        let demo: Option<Arc<dyn RecordSource<R>>> = if self.demo_mode {
            Some(Arc::new(DemoSource))
        } else {
            None
        };
        Widget::mount(source, demo, object_id)
    }

    pub fn mount_contact(&self, object_id: impl Into<String>) -> Widget<Contact> {
        self.mount(object_id)
    }

    pub fn mount_deal(&self, object_id: impl Into<String>) -> Widget<Deal> {
        self.mount(object_id)
    }

    pub fn mount_company(&self, object_id: impl Into<String>) -> Widget<Company> {
        self.mount(object_id)
    }
}
