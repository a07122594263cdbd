//! HTML rendering — the one concrete `Mount` implementation.
//!
//! `HtmlMount` buffers the nodes the binder pushes; `Page::into_html`
//! substitutes each buffered section into the static template and attaches
//! reveal delays. The binder never sees any of this.

use crate::binder::{Mount, MountPoints, Node};
use crate::models::resume::ResumeDocument;
use crate::reveal::{RevealSchedule, Section};

const TEMPLATE: &str = include_str!("../../assets/page.html");

/// Elements with no closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr"];

/// Mount that buffers bound nodes for later HTML assembly.
#[derive(Default)]
pub struct HtmlMount {
    nodes: Vec<Node>,
    hidden: bool,
}

impl Mount for HtmlMount {
    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }
}

/// All seven mounts of the page.
#[derive(Default)]
pub struct Page {
    personal: HtmlMount,
    skills: HtmlMount,
    education: HtmlMount,
    experience: HtmlMount,
    achievements: HtmlMount,
    certificates: HtmlMount,
    interests: HtmlMount,
}

impl Page {
    pub fn mounts(&mut self) -> MountPoints<'_> {
        MountPoints {
            personal: &mut self.personal,
            skills: &mut self.skills,
            education: &mut self.education,
            experience: &mut self.experience,
            achievements: &mut self.achievements,
            certificates: &mut self.certificates,
            interests: &mut self.interests,
        }
    }

    /// Assembles the finished page.
    pub fn into_html(self) -> String {
        assemble(self, "")
    }
}

/// Page shown when both data sources failed: the empty skeleton plus a
/// banner carrying the terminal error message.
pub fn error_page(message: &str) -> String {
    let mut page = Page::default();
    crate::binder::bind(&ResumeDocument::default(), &mut page.mounts());
    let banner = format!("<div class=\"banner\">{}</div>", escape(message));
    assemble(page, &banner)
}

fn assemble(page: Page, banner: &str) -> String {
    let mut html = TEMPLATE.replace("{{error_banner}}", banner);
    html = html.replace("{{personal}}", &personal_html(&page.personal));

    let sections: [(&str, &HtmlMount, Section); 6] = [
        ("skills", &page.skills, Section::Skills),
        ("education", &page.education, Section::Timeline),
        ("experience", &page.experience, Section::Timeline),
        ("achievements", &page.achievements, Section::Cards),
        ("certificates", &page.certificates, Section::Cards),
        ("interests", &page.interests, Section::Chips),
    ];
    for (token, mount, section) in sections {
        html = html.replace(&format!("{{{{{token}}}}}"), &section_html(mount, section));
        html = html.replace(
            &format!("{{{{{token}_hidden}}}}"),
            if mount.hidden { " hidden" } else { "" },
        );
    }
    html
}

/// Renders one list section, staggering every child on its schedule.
fn section_html(mount: &HtmlMount, section: Section) -> String {
    let schedule = RevealSchedule::for_section(section);
    let mut out = String::new();
    for (index, node) in mount.nodes.iter().enumerate() {
        node_html(&with_delay(node, schedule.delay_ms(index)), &mut out);
    }
    out
}

/// The personal block mixes scalar nodes (name, title, summary, avatar) with
/// contact rows; only the rows are staggered, on their own index.
fn personal_html(mount: &HtmlMount) -> String {
    let schedule = RevealSchedule::for_section(Section::Contacts);
    let mut out = String::new();
    let mut contact_index = 0;
    for node in &mount.nodes {
        if node.class == Some("contact-row") {
            node_html(&with_delay(node, schedule.delay_ms(contact_index)), &mut out);
            contact_index += 1;
        } else {
            node_html(node, &mut out);
        }
    }
    out
}

fn with_delay(node: &Node, delay_ms: u32) -> Node {
    let mut node = node.clone();
    match node.attrs.iter_mut().find(|(name, _)| *name == "style") {
        Some((_, value)) => value.push_str(&format!(";animation-delay:{delay_ms}ms")),
        None => node
            .attrs
            .push(("style", format!("animation-delay:{delay_ms}ms"))),
    }
    node
}

fn node_html(node: &Node, out: &mut String) {
    out.push('<');
    out.push_str(node.tag);
    if let Some(class) = node.class {
        out.push_str(" class=\"");
        out.push_str(class);
        out.push('"');
    }
    for (name, value) in &node.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
    out.push('>');
    if let Some(text) = &node.text {
        out.push_str(&escape(text));
    }
    for child in &node.children {
        node_html(child, out);
    }
    if !VOID_TAGS.contains(&node.tag) {
        out.push_str("</");
        out.push_str(node.tag);
        out.push('>');
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
