use crate::ui::html::{link, Element, Markup};
use crate::ui::theme;

/// Wrap a page's content in the shared layout and a complete HTML document.
pub(crate) fn document(title: &str, stylesheet: Option<&str>, page: Markup) -> Markup {
    let mut head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(Element::new("title").text(&format!("{title} - {}", theme::SITE_TITLE)));
    if let Some(href) = stylesheet {
        head = head.child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", href),
        );
    }
    let body = Element::new("body").child(
        Element::new("div")
            .id("container")
            .child(Element::new("div").child(topbar()).child(layout(page))),
    );

    let mut out = Markup::raw("<!DOCTYPE html>\n");
    out.push(Element::new("html").attr("lang", "en").child(head).child(body));
    out
}

/// The document used when dispatch found no page.
pub(crate) fn not_found_document(kind: Option<&str>, stylesheet: Option<&str>) -> Markup {
    let message = match kind {
        Some(kind) if !kind.is_empty() => format!("There is no page for /{kind}."),
        _ => "There is no page here.".to_string(),
    };
    let page = Element::new("div")
        .class(theme::NOT_FOUND)
        .child(Element::new("h1").text("Not found"))
        .child(Element::new("p").text(&message))
        .build();
    document("Not found", stylesheet, page)
}

fn topbar() -> Markup {
    let home = Element::new("li").child(
        Element::new("a")
            .class(theme::NAVITEM)
            .attr("href", "/")
            .text("Home"),
    );
    Element::new("div")
        .id("topbar")
        .class("topbar")
        .child(Element::new("nav").child(Element::new("ul").child(home)))
        .build()
}

fn sidebar() -> Markup {
    let items = theme::SIDEBAR_LINKS
        .iter()
        .map(|(label, href)| Element::new("li").child(link(href, label)));
    Element::new("div")
        .id("sidebar")
        .class("sidebar")
        .child(Element::new("ul").children(items))
        .build()
}

/// Main page slot beside the sidebar.
pub(crate) fn layout(page: Markup) -> Markup {
    let main = Element::new("div")
        .id("documentwrapper")
        .class("documentwrapper")
        .child(
            Element::new("div")
                .id("mainpagewrapper")
                .class("mainpagewrapper")
                .child(Element::new("div").id("mainpage").class("mainpage").child(page)),
        );
    let side = Element::new("div")
        .id("sidebarwrapper")
        .class("sidebarwrapper")
        .child(sidebar());
    Element::new("div")
        .id("document")
        .class("document")
        .child(main)
        .child(side)
        .build()
}
