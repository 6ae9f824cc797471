#![allow(dead_code)]

use std::rc::Rc;

use ecopulse_ui::fake::{FakeSurface, NodeId};
use ecopulse_ui::{Page, UiConfig, UiSurface};

/// Handles to the landmarks of a typical landing page.
pub struct Landing {
    pub page: Page<FakeSurface>,
    pub dom: Rc<FakeSurface>,
    pub skip_link: NodeId,
    pub main: NodeId,
    pub menu_btn: NodeId,
    pub menu: NodeId,
    pub links: Vec<NodeId>,
    pub scroll_top: NodeId,
    pub indicator: NodeId,
    pub hero: NodeId,
    pub features: NodeId,
    pub reveals: Vec<NodeId>,
    pub slider: NodeId,
    pub year: NodeId,
    pub outside: NodeId,
}

pub fn landing(link_count: usize) -> Landing {
    let dom = Rc::new(FakeSurface::new());
    let root = dom.root();

    let skip_link = dom
        .append(root, "a")
        .class("skip-link")
        .attr("href", "#main-content")
        .node();
    let header = dom.append(root, "header").node();
    let menu_btn = dom
        .append(header, "button")
        .id("mobile-menu-btn")
        .class("btn")
        .node();
    let menu = dom
        .append(header, "div")
        .id("mobile-menu")
        .class("hidden")
        .node();
    let links = (0..link_count)
        .map(|i| {
            dom.append(menu, "a")
                .attr("href", &format!("#section-{i}"))
                .node()
        })
        .collect();

    let main = dom.append(root, "main").id("main-content").node();
    let hero = dom.append(main, "section").class("hero-section").node();
    let indicator = dom.append(hero, "div").id("scroll-indicator").node();
    let features = dom.append(main, "section").id("features").node();
    let reveals = (0..3)
        .map(|_| dom.append(features, "div").class("scroll-reveal").node())
        .collect();
    let slider = dom
        .append(features, "input")
        .attr("type", "range")
        .attr("min", "0")
        .attr("max", "10")
        .attr("step", "2")
        .value("4")
        .node();
    let outside = dom.append(features, "p").node();

    let footer = dom.append(root, "footer").node();
    let year = dom.append(footer, "span").id("year").node();
    let scroll_top = dom
        .append(root, "button")
        .id("scroll-to-top")
        .class("opacity-0")
        .class("invisible")
        .class("translate-y-4")
        .node();

    dom.set_year(2025);
    let page = Page::with_surface(Rc::clone(&dom), UiConfig::default());

    Landing {
        page,
        dom,
        skip_link,
        main,
        menu_btn,
        menu,
        links,
        scroll_top,
        indicator,
        hero,
        features,
        reveals,
        slider,
        year,
        outside,
    }
}

pub fn initialized(link_count: usize) -> Landing {
    let mut landing = landing(link_count);
    landing.page.init().expect("fake surface never fails to bind");
    landing
}

pub fn has(dom: &FakeSurface, node: NodeId, class: &str) -> bool {
    dom.has_class(&node, class)
}
