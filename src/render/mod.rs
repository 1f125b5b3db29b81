//! Presentational rendering: pure mapping from load state to a display tree.
//!
//! Exactly one of {skeleton, error panel, full view} comes out of `render`
//! for any state — never a partial or mixed tree. Record views carry the
//! derived display values (score tiers, formatted currency, progress width);
//! everything else on screen is verbatim backend data.

mod company;
mod contact;
mod deal;
pub mod format;
pub mod html;
mod node;
mod tier;

pub use node::Node;
pub use tier::ScoreTier;

use crate::types::CrmRecord;
use crate::widget::{DataOrigin, LoadState};

/// A record that knows its loaded view and its loading skeleton.
pub trait RecordView: CrmRecord {
    /// Full display tree for a loaded record.
    fn view(&self) -> Node;
    /// Placeholder matching the shape of the eventual content.
    fn skeleton() -> Node;
}

/// Map a load state to its display tree.
///
/// Demo-origin records render with a demo notice prepended so placeholder
/// data is never mistaken for a live record.
pub fn render<R: RecordView>(state: &LoadState<R>) -> Node {
    match state {
        LoadState::Loading => R::skeleton(),
        LoadState::Failed { message } => Node::ErrorPanel {
            message: message.clone(),
            can_retry: true,
        },
        LoadState::Loaded { record, origin } => {
            let view = record.view();
            match origin {
                DataOrigin::Live => view,
                DataOrigin::Demo => match view {
                    Node::Panel { title, mut children } => {
                        children.insert(0, Node::DemoNotice);
                        Node::Panel { title, children }
                    }
                    // A view that is not a panel still needs the label, so
                    // it gets wrapped in one.
                    other => Node::Panel {
                        title: R::KIND.label().to_string(),
                        children: vec![Node::DemoNotice, other],
                    },
                },
            }
        }
    }
}
