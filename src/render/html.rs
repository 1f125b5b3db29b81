//! HTML serialization of a display tree for plain embedding.
//!
//! Markup is deliberately minimal: `hw-` classes, inline styles only where a
//! value is data-driven (tier colors, stage colors, progress width). All
//! record-supplied text is escaped.

use super::node::Node;

/// Serialize a display tree to an HTML fragment.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Panel { title, children } => {
            out.push_str("<div class=\"hw-panel\">");
            out.push_str(&format!("<h2 class=\"hw-title\">{}</h2>", escape(title)));
            for child in children {
                write_node(out, child);
            }
            out.push_str("</div>");
        }
        Node::Section { title, children } => {
            out.push_str("<div class=\"hw-section\">");
            out.push_str(&format!("<h3>{}</h3>", escape(title)));
            for child in children {
                write_node(out, child);
            }
            out.push_str("</div>");
        }
        Node::Row { label, value } => {
            out.push_str(&format!(
                "<div class=\"hw-row\"><span class=\"hw-label\">{}</span><span class=\"hw-value\">{}</span></div>",
                escape(label),
                escape(value)
            ));
        }
        Node::Stat { label, value } => {
            out.push_str(&format!(
                "<div class=\"hw-stat\"><div class=\"hw-label\">{}</div><div class=\"hw-stat-value\">{}</div></div>",
                escape(label),
                escape(value)
            ));
        }
        Node::ScoreBadge { label, value, tier } => {
            out.push_str(&format!(
                "<div class=\"hw-row\"><span class=\"hw-label\">{}</span><span class=\"hw-badge\" style=\"color:{}\">{}</span></div>",
                escape(label),
                tier.color(),
                escape(value)
            ));
        }
        Node::ColoredBadge { text, color } => {
            out.push_str(&format!(
                "<span class=\"hw-badge\" style=\"color:{}\">{}</span>",
                escape(color),
                escape(text)
            ));
        }
        Node::Link { label, href } => {
            out.push_str(&format!(
                "<div class=\"hw-row\"><span class=\"hw-label\">{}</span><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></div>",
                escape(label),
                escape(href),
                escape(href)
            ));
        }
        Node::Progress { label, percent } => {
            out.push_str(&format!(
                "<div class=\"hw-progress\"><span class=\"hw-label\">{}</span><div class=\"hw-progress-track\"><div class=\"hw-progress-fill\" style=\"width:{}%\"></div></div></div>",
                escape(label),
                (*percent).min(100)
            ));
        }
        Node::List { title, items } => {
            out.push_str("<div class=\"hw-insights\">");
            out.push_str(&format!("<h3>{}</h3><ul>", escape(title)));
            for item in items {
                out.push_str(&format!("<li>{}</li>", escape(item)));
            }
            out.push_str("</ul></div>");
        }
        Node::DemoNotice => {
            out.push_str(
                "<div class=\"hw-demo-notice\">Demo data — not a live record</div>",
            );
        }
        Node::Skeleton { kind } => {
            out.push_str(&format!(
                "<div class=\"hw-skeleton hw-skeleton-{}\"></div>",
                kind.label()
            ));
        }
        Node::ErrorPanel { message, can_retry } => {
            out.push_str("<div class=\"hw-error\">");
            out.push_str("<h3>Error Loading Data</h3>");
            out.push_str(&format!("<p>{}</p>", escape(message)));
            if *can_retry {
                out.push_str("<button class=\"hw-retry\">Retry</button>");
            }
            out.push_str("</div>");
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
