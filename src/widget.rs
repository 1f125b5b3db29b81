//! Widget load controller.
//!
//! Owns the loading / loaded / failed lifecycle for one record identifier.
//! Every dispatched load carries a generation number; a resolution is applied
//! only if its generation still matches the current one, so a late response
//! for a superseded identifier can never overwrite newer state. Network-level
//! cancellation is not needed for correctness — stale tasks resolve, fail the
//! generation check, and drop their result.
//!
//! State is published through a `tokio::sync::watch` channel so hosts
//! re-render reactively on identifier changes, retries, and resolutions.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::api::{ApiError, RecordSource};
use crate::render::{self, Node, RecordView};
use crate::types::RecordKind;

/// Where a loaded record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    /// Fetched from the backend.
    Live,
    /// Bundled sample substituted after a fetch failure in demo mode.
    Demo,
}

/// Render state of one widget instance. Exactly one variant holds at a time:
/// a record and an error are never present together.
#[derive(Debug, Clone)]
pub enum LoadState<R> {
    /// A request is in flight (initial state, re-entered on identifier change
    /// and on retry).
    Loading,
    Loaded { record: R, origin: DataOrigin },
    Failed { message: String },
}

impl<R> LoadState<R> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Identifier and generation of the most recently requested load.
struct LoadCursor {
    object_id: String,
    generation: u64,
}

struct WidgetInner<R: RecordView> {
    source: Arc<dyn RecordSource<R>>,
    /// Fallback source consulted after a failed fetch; present only when the
    /// registry was configured with demo mode on.
    demo: Option<Arc<dyn RecordSource<R>>>,
    state: watch::Sender<LoadState<R>>,
    cursor: Mutex<LoadCursor>,
}

/// One embeddable widget instance. Cheap to clone; clones share state.
///
/// Loads run on spawned tasks, so widgets must be created and driven inside
/// a tokio runtime.
pub struct Widget<R: RecordView> {
    inner: Arc<WidgetInner<R>>,
}

impl<R: RecordView> Clone for Widget<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<R: RecordView> Widget<R> {
    /// Create a widget for `object_id` and dispatch its first load.
    ///
    /// `object_id` must be non-empty; supplying it is the host's contract.
    pub fn mount(
        source: Arc<dyn RecordSource<R>>,
        demo: Option<Arc<dyn RecordSource<R>>>,
        object_id: impl Into<String>,
    ) -> Self {
        let (state, _) = watch::channel(LoadState::Loading);
        let widget = Self {
            inner: Arc::new(WidgetInner {
                source,
                demo,
                state,
                cursor: Mutex::new(LoadCursor {
                    object_id: object_id.into(),
                    generation: 0,
                }),
            }),
        };
        widget.begin_load();
        widget
    }

    /// The identifier currently displayed (or loading).
    pub fn object_id(&self) -> String {
        self.inner.cursor.lock().object_id.clone()
    }

    /// Point the widget at a different record. Re-enters Loading and discards
    /// the previous record or error. Setting the current identifier again is
    /// a no-op; use [`Widget::retry`] to re-issue a request.
    pub fn set_object_id(&self, object_id: &str) {
        {
            let mut cursor = self.inner.cursor.lock();
            if cursor.object_id == object_id {
                return;
            }
            cursor.object_id = object_id.to_string();
        }
        self.begin_load();
    }

    /// Re-issue the request for the current identifier (user-triggered).
    pub fn retry(&self) {
        self.begin_load();
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LoadState<R> {
        self.inner.state.borrow().clone()
    }

    /// Subscribe to state changes. The receiver sees every transition made
    /// after subscription (watch semantics: intermediate states may coalesce).
    pub fn subscribe(&self) -> watch::Receiver<LoadState<R>> {
        self.inner.state.subscribe()
    }

    /// Render the current state to a display tree.
    pub fn view(&self) -> Node {
        render::render(&self.state())
    }

    fn begin_load(&self) {
        // Loading is published under the cursor lock so it orders with the
        // generation bump: a concurrent resolution for an older generation
        // can never land after this load's Loading and wedge the widget.
        let (generation, object_id) = {
            let mut cursor = self.inner.cursor.lock();
            cursor.generation += 1;
            self.inner.state.send_replace(LoadState::Loading);
            (cursor.generation, cursor.object_id.clone())
        };

        let inner = self.inner.clone();
        tokio::spawn(async move {
            let state = match inner.source.fetch(&object_id).await {
                Ok(record) => LoadState::Loaded {
                    record,
                    origin: DataOrigin::Live,
                },
                Err(err) => {
                    log::warn!(
                        "{} widget load failed for '{}': {}",
                        R::KIND.label(),
                        object_id,
                        err
                    );
                    match &inner.demo {
                        Some(demo) => match demo.fetch(&object_id).await {
                            Ok(record) => {
                                log::info!(
                                    "{} widget serving demo record for '{}'",
                                    R::KIND.label(),
                                    object_id
                                );
                                LoadState::Loaded {
                                    record,
                                    origin: DataOrigin::Demo,
                                }
                            }
                            Err(_) => failed_state(&err, R::KIND),
                        },
                        None => failed_state(&err, R::KIND),
                    }
                }
            };

            // Discard if another load was dispatched while this one was
            // in flight.
            let cursor = inner.cursor.lock();
            if cursor.generation == generation {
                inner.state.send_replace(state);
            }
        });
    }
}

/// Convert a fetch error into the single displayable failure state.
/// Application messages pass through verbatim; everything else gets a generic
/// message (the underlying cause was already logged at the fetch site).
fn failed_state<R>(err: &ApiError, kind: RecordKind) -> LoadState<R> {
    let message = match err {
        ApiError::Application(message) => message.clone(),
        ApiError::Empty => format!("No {} data available", kind.label()),
        ApiError::Transport(_) | ApiError::Http { .. } | ApiError::Decode(_) => {
            format!("Failed to load {} data", kind.label())
        }
    };
    LoadState::Failed { message }
}
