//! View Binder — maps a `ResumeDocument` onto named mount points.
//!
//! The binder is independent of any rendering technology: it produces owned
//! `Node` trees through the `Mount` capability and never sees HTML. It has
//! no error states — missing or malformed fields are silently defaulted, a
//! deliberate permissiveness policy.
//!
//! Uniform rule for every list section: absent or empty → container hidden,
//! mount cleared, no placeholder content. Otherwise the container is shown,
//! previous content cleared, and one child is pushed per item in input order.

pub mod node;

pub use node::Node;

use crate::models::resume::{
    Achievement, Certificate, Contact, Personal, ResumeDocument, Skill, TimelineEntry,
};

/// Placeholder for a missing name or title.
const PLACEHOLDER: &str = "—";

/// A named insertion target in the presentation layer.
pub trait Mount {
    /// Remove previously rendered children.
    fn clear(&mut self);
    /// Toggle the section container's visibility.
    fn set_hidden(&mut self, hidden: bool);
    /// Attach one rendered child; calls preserve input order.
    fn push(&mut self, node: Node);
}

/// One mount per section, in binding order.
pub struct MountPoints<'a> {
    pub personal: &'a mut dyn Mount,
    pub skills: &'a mut dyn Mount,
    pub education: &'a mut dyn Mount,
    pub experience: &'a mut dyn Mount,
    pub achievements: &'a mut dyn Mount,
    pub certificates: &'a mut dyn Mount,
    pub interests: &'a mut dyn Mount,
}

/// Binds the document onto the mounts. Invocation order is fixed: personal,
/// skills, education, experience, achievements, certificates, interests.
/// The document is never mutated.
pub fn bind(doc: &ResumeDocument, mounts: &mut MountPoints<'_>) {
    bind_personal(doc.personal.as_ref(), mounts.personal);
    bind_list(doc.skills.as_deref(), mounts.skills, skill_node);
    bind_list(doc.education.as_deref(), mounts.education, timeline_node);
    bind_list(doc.experience.as_deref(), mounts.experience, timeline_node);
    bind_list(
        doc.achievements.as_deref(),
        mounts.achievements,
        achievement_node,
    );
    bind_list(
        doc.certificates.as_deref(),
        mounts.certificates,
        certificate_node,
    );
    bind_list(doc.interests.as_deref(), mounts.interests, interest_node);
}

fn bind_list<T>(items: Option<&[T]>, mount: &mut dyn Mount, make: fn(&T) -> Node) {
    mount.clear();
    match items {
        Some(items) if !items.is_empty() => {
            mount.set_hidden(false);
            for item in items {
                mount.push(make(item));
            }
        }
        _ => mount.set_hidden(true),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Per-section node construction
// ────────────────────────────────────────────────────────────────────────────

fn bind_personal(personal: Option<&Personal>, mount: &mut dyn Mount) {
    mount.clear();
    mount.set_hidden(false);

    let empty = Personal::default();
    let personal = personal.unwrap_or(&empty);

    mount.push(
        Node::new("h2")
            .class("full-name")
            .text(text_or_placeholder(&personal.full_name)),
    );
    mount.push(
        Node::new("p")
            .class("title")
            .text(text_or_placeholder(&personal.title)),
    );
    mount.push(
        Node::new("p")
            .class("summary")
            .text(text_or_empty(&personal.summary)),
    );

    if let Some(avatar) = non_empty(&personal.avatar) {
        mount.push(
            Node::new("img")
                .class("avatar")
                .attr("src", avatar)
                .attr("alt", "avatar"),
        );
    }

    for contact in &personal.contacts {
        mount.push(contact_row(contact));
    }
}

fn contact_row(contact: &Contact) -> Node {
    let label = format!("{}:", text_or_empty(&contact.label));
    let row = Node::new("div")
        .class("contact-row")
        .child(Node::new("small").text(label));

    match non_empty(&contact.href) {
        Some(href) => {
            // Anchor label falls back to the href itself when value is missing.
            let label = non_empty(&contact.value).unwrap_or(href);
            row.child(Node::anchor(href, label))
        }
        None => row.child(Node::new("span").text(text_or_empty(&contact.value))),
    }
}

fn skill_node(skill: &Skill) -> Node {
    let level = skill.clamped_level();
    Node::new("div")
        .class("skill")
        .child(
            Node::new("p")
                .class("skill-title")
                .text(text_or_empty(&skill.name)),
        )
        .child(
            Node::new("div")
                .class("progress")
                .child(Node::new("span").attr("style", format!("width:{level}%"))),
        )
}

fn timeline_node(entry: &TimelineEntry) -> Node {
    Node::new("div")
        .class("timeline-item")
        .child(
            Node::new("div")
                .class("timeline-top")
                .child(
                    Node::new("p")
                        .class("timeline-title")
                        .text(entry.heading()),
                )
                .child(
                    Node::new("small")
                        .class("timeline-meta")
                        .text(timeline_meta(entry)),
                ),
        )
        .child(
            Node::new("p")
                .class("timeline-desc")
                .text(text_or_empty(&entry.description)),
        )
}

/// `"degree-or-role | start - end"`, dropping the left part when empty.
fn timeline_meta(entry: &TimelineEntry) -> String {
    let subtitle = entry.subtitle();
    if subtitle.is_empty() {
        entry.period()
    } else {
        format!("{subtitle} | {}", entry.period())
    }
}

fn achievement_node(achievement: &Achievement) -> Node {
    let card = Node::new("div")
        .class("card-item")
        .child(
            Node::new("p")
                .class("timeline-title")
                .text(text_or_empty(&achievement.title)),
        )
        .child(
            Node::new("small")
                .class("timeline-meta")
                .text(text_or_empty(&achievement.description)),
        );

    match non_empty(&achievement.link) {
        Some(link) => card.child(Node::anchor(link, "View Profile")),
        None => card,
    }
}

fn certificate_node(certificate: &Certificate) -> Node {
    let meta: Vec<&str> = [&certificate.issuer, &certificate.date]
        .into_iter()
        .filter_map(non_empty)
        .collect();

    let card = Node::new("div")
        .class("card-item")
        .child(
            Node::new("p")
                .class("timeline-title")
                .text(text_or_empty(&certificate.title)),
        )
        .child(
            Node::new("small")
                .class("timeline-meta")
                .text(meta.join(" • ")),
        );

    match non_empty(&certificate.link) {
        Some(link) => card.child(Node::anchor(link, link)),
        None => card,
    }
}

fn interest_node(name: &String) -> Node {
    Node::new("li").class("chip").text(name.clone())
}

// ────────────────────────────────────────────────────────────────────────────
// Defaulting helpers
// ────────────────────────────────────────────────────────────────────────────

fn non_empty(opt: &Option<String>) -> Option<&str> {
    opt.as_deref().filter(|s| !s.is_empty())
}

fn text_or_empty(opt: &Option<String>) -> String {
    opt.clone().unwrap_or_default()
}

fn text_or_placeholder(opt: &Option<String>) -> String {
    non_empty(opt).unwrap_or(PLACEHOLDER).to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
