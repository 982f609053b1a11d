//! Page Renderer: builds the one-page portfolio as an element tree.
//!
//! The builders borrow the store for one pass and return owned nodes, so the
//! caller can release the store lock before serializing. Every repeated
//! layout iterates the store in insertion order; optional fields are omitted
//! when absent, never rendered empty.

use crate::contact::form::{ContactForm, Notification};
use crate::content::ContentStore;
use crate::models::content::{EducationEntry, ExperienceEntry, Project, SkillCategory};
use crate::models::profile::{OwnerProfile, SocialKind};
use crate::render::links::is_web_url;
use crate::render::markdown::markdown_blocks;
use crate::render::node::{text_el, Element, Node};
use crate::render::section::Section;
use crate::render::style::STYLESHEET;

const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap";
const ICON_STYLESHEET: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Everything the page needs that does not come from the content store.
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    pub app_name: &'a str,
    pub owner: &'a OwnerProfile,
    /// Shown in the footer copyright line.
    pub year: i32,
    pub contact: ContactView,
}

/// State of the contact form for this render.
#[derive(Debug, Clone, Default)]
pub struct ContactView {
    pub form: ContactForm,
    pub notification: Option<Notification>,
}

pub fn static_url(filename: &str) -> String {
    format!("/static/{filename}")
}

pub fn build_page(store: &ContentStore, ctx: &PageContext<'_>) -> Element {
    let main = Element::new("main")
        .child(hero(store, ctx))
        .child(
            Element::new("div")
                .class("container")
                .child(about_section(store))
                .child(skills_section(store))
                .child(projects_section(store))
                .child(experience_section(store))
                .child(education_section(store))
                .child(contact_section(ctx)),
        );

    Element::new("html").attr("lang", "en").child(head(ctx)).child(
        Element::new("body")
            .child(navigation(ctx))
            .child(main)
            .child(footer(ctx)),
    )
}

fn head(ctx: &PageContext<'_>) -> Element {
    Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1.0"),
        )
        .child(Element::new("title").text(ctx.app_name))
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", FONT_STYLESHEET),
        )
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", ICON_STYLESHEET),
        )
        .child(Element::new("style").child(Node::Raw(STYLESHEET)))
}

fn navigation(ctx: &PageContext<'_>) -> Element {
    let home = Element::new("a")
        .class("nav-link")
        .attr("href", "/")
        .text("Home");
    let links = Section::ALL.iter().map(|section| {
        Element::new("a")
            .class("nav-link")
            .attr("href", section.href())
            .text(section.nav_label())
    });

    Element::new("header")
        .class("site-header")
        .child(
            Element::new("a")
                .class("site-title nav-link")
                .attr("href", "/")
                .text(ctx.app_name),
        )
        .child(Element::new("nav").class("nav").child(home).children(links))
}

fn hero(store: &ContentStore, ctx: &PageContext<'_>) -> Element {
    let owner = ctx.owner;
    let text = Element::new("div")
        .class("hero-text")
        .child(Element::new("h1").text(format!("Hello, I'm {}", owner.name)))
        .child(text_el("div", "hero-subtitle", owner.title.as_str()))
        .child(
            Element::new("div")
                .class("hero-bio")
                .children(markdown_blocks(store.bio())),
        )
        .child(
            Element::new("div")
                .class("hero-actions")
                .child(
                    Element::new("a")
                        .class("button button-solid")
                        .attr("href", Section::Projects.href())
                        .text("View Projects"),
                )
                .child(
                    Element::new("a")
                        .class("button button-outline")
                        .attr("href", Section::Contact.href())
                        .text("Contact Me"),
                ),
        );

    let image = Element::new("div").class("hero-image-wrap").child(
        Element::new("img")
            .class("profile-image")
            .attr("src", static_url(&owner.profile_image))
            .attr("alt", owner.name.as_str()),
    );

    Element::new("section").class("hero-section").child(
        Element::new("div")
            .class("container")
            .child(Element::new("div").class("hero-row").child(text).child(image)),
    )
}

fn section_shell(section: Section) -> Element {
    Element::new("section")
        .class("section")
        .id(section.id())
        .child(text_el("h2", "section-heading", section.heading()))
}

fn about_section(store: &ContentStore) -> Element {
    section_shell(Section::About).child(
        Element::new("div")
            .class("about-text")
            .children(markdown_blocks(store.about())),
    )
}

/// One tag per entry, in order, no dedup.
fn tag_list(tags: &[String], class: &str) -> Element {
    Element::new("ul")
        .class("tag-row")
        .children(tags.iter().map(|tag| text_el("li", class, tag.as_str())))
}

fn skills_section(store: &ContentStore) -> Element {
    let groups = SkillCategory::ALL.iter().map(|category| {
        Element::new("div")
            .class("skill-group")
            .attr("data-category", skill_slug(*category))
            .child(text_el("h3", "subheading", category.heading()))
            .child(tag_list(store.skills(*category), "skill-tag"))
    });
    section_shell(Section::Skills).children(groups)
}

fn skill_slug(category: SkillCategory) -> &'static str {
    match category {
        SkillCategory::Technical => "technical",
        SkillCategory::AiMl => "ai-ml",
        SkillCategory::Tools => "tools",
    }
}

fn projects_section(store: &ContentStore) -> Element {
    section_shell(Section::Projects).child(
        Element::new("div")
            .class("project-grid")
            .children(store.projects().iter().map(project_card)),
    )
}

fn project_card(project: &Project) -> Element {
    let image = project.image.as_deref().map(|image| {
        Element::new("img")
            .class("project-image")
            .attr("src", static_url(image))
            .attr("alt", project.title.as_str())
    });

    // Non-web URLs are dropped like absent ones.
    let demo = project
        .demo_url
        .as_deref()
        .filter(|url| is_web_url(url))
        .map(|url| external_link(url, "demo-link", "Live Demo"));
    let repo = project
        .repo_url
        .as_deref()
        .filter(|url| is_web_url(url))
        .map(|url| external_link(url, "repo-link", "GitHub"));
    let links = (demo.is_some() || repo.is_some()).then(|| {
        Element::new("div")
            .class("project-links")
            .children(demo)
            .children(repo)
    });

    let body = Element::new("div")
        .class("card-body")
        .child(text_el("h3", "project-title", project.title.as_str()))
        .child(text_el("div", "project-category", project.category.as_str()))
        .child(
            Element::new("div")
                .class("project-description")
                .children(markdown_blocks(&project.description)),
        )
        .children(technology_tags(&project.technologies))
        .children(links);

    Element::new("article")
        .class("card project-card")
        .children(image)
        .child(body)
}

fn technology_tags(technologies: &[String]) -> Option<Element> {
    (!technologies.is_empty()).then(|| tag_list(technologies, "skill-tag small"))
}

fn external_link(href: &str, class: &str, label: &str) -> Element {
    Element::new("a")
        .class(class)
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .text(label)
}

fn timeline_item(
    title: &str,
    dates: String,
    organization: &str,
    description: &str,
    technologies: &[String],
) -> Element {
    Element::new("div")
        .class("timeline-item")
        .child(
            Element::new("div")
                .class("timeline-header")
                .child(text_el("div", "timeline-title", title))
                .child(text_el("div", "timeline-dates", dates)),
        )
        .child(text_el("div", "timeline-org", organization))
        .child(
            Element::new("div")
                .class("timeline-description")
                .children(markdown_blocks(description)),
        )
        .children(technology_tags(technologies))
}

fn experience_item(job: &ExperienceEntry) -> Element {
    timeline_item(
        &job.title,
        format!("{} - {}", job.start_date, job.end_date),
        &job.company,
        &job.description,
        &job.technologies,
    )
}

fn education_item(edu: &EducationEntry) -> Element {
    timeline_item(
        &edu.degree,
        format!("{} - {}", edu.start_date, edu.end_date),
        &edu.institution,
        &edu.description,
        &[],
    )
}

fn experience_section(store: &ContentStore) -> Element {
    section_shell(Section::Experience).children(store.experience().iter().map(experience_item))
}

fn education_section(store: &ContentStore) -> Element {
    section_shell(Section::Education).children(store.education().iter().map(education_item))
}

fn contact_section(ctx: &PageContext<'_>) -> Element {
    section_shell(Section::Contact).child(
        Element::new("div")
            .class("contact-row")
            .child(contact_form(&ctx.contact))
            .child(contact_info(ctx.owner)),
    )
}

fn labelled_input(name: &'static str, label: &str, input_type: &str, value: &str) -> [Element; 2] {
    [
        Element::new("label").attr("for", name).text(label),
        Element::new("input")
            .attr("type", input_type)
            .attr("id", name)
            .attr("name", name)
            .attr("value", value),
    ]
}

fn contact_form(view: &ContactView) -> Element {
    let form = &view.form;
    let notification = view.notification.as_ref().map(|n| {
        Element::new("div")
            .class(n.kind.css_class())
            .attr("role", "status")
            .text(n.message)
    });

    Element::new("div")
        .class("contact-column")
        .child(text_el("h3", "subheading", "Send me a message"))
        .children(notification)
        .child(
            Element::new("form")
                .class("contact-form")
                .attr("method", "post")
                .attr("action", format!("/contact{}", Section::Contact.href()))
                .children(labelled_input("name", "Your Name", "text", &form.name))
                .children(labelled_input("email", "Your Email", "email", &form.email))
                .children(labelled_input("subject", "Subject", "text", &form.subject))
                .child(Element::new("label").attr("for", "message").text("Message"))
                .child(
                    Element::new("textarea")
                        .attr("id", "message")
                        .attr("name", "message")
                        .attr("rows", "5")
                        .text(form.message.as_str()),
                )
                .child(
                    Element::new("button")
                        .class("button button-primary")
                        .attr("type", "submit")
                        .text("Send Message"),
                ),
        )
}

fn contact_info(owner: &OwnerProfile) -> Element {
    let links = owner.social_links();
    // Email leads the list here; the footer keeps social order.
    let ordered = links
        .iter()
        .filter(|l| l.kind == SocialKind::Email)
        .chain(links.iter().filter(|l| l.kind != SocialKind::Email));

    let items = ordered.map(|link| {
        let anchor = match link.kind {
            SocialKind::Email => Element::new("a")
                .attr("href", link.href.as_str())
                .text(owner.email.as_str()),
            _ => external_link(&link.href, "contact-link", link.kind.label()),
        };
        Element::new("li")
            .class(&format!("contact-{}", link.kind.slug()))
            .child(Element::new("i").class(link.kind.icon_class()))
            .child(anchor)
    });

    Element::new("div")
        .class("contact-column")
        .child(text_el("h3", "subheading", "Contact Information"))
        .child(Element::new("ul").class("contact-info").children(items))
}

fn footer(ctx: &PageContext<'_>) -> Element {
    let icons = ctx.owner.social_links().into_iter().map(|link| {
        let anchor = Element::new("a")
            .class(&format!("social-icon social-{}", link.kind.slug()))
            .attr("href", link.href)
            .attr("aria-label", link.kind.label());
        let anchor = match link.kind {
            SocialKind::Email => anchor,
            _ => anchor
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer"),
        };
        anchor.child(Element::new("i").class(link.kind.icon_class()))
    });

    Element::new("footer").class("site-footer").child(
        Element::new("div")
            .class("container footer-row")
            .child(text_el(
                "span",
                "copyright",
                format!("© {} {}", ctx.owner.name, ctx.year),
            ))
            .child(Element::new("div").class("social-links").children(icons)),
    )
}
