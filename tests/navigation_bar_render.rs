use std::any::Any;
use std::rc::Rc;

use dioxus::dioxus_core::{ElementId, Mutation, Mutations};
use dioxus::html::geometry::{ClientPoint, Coordinates, ElementPoint, PagePoint, ScreenPoint};
use dioxus::html::input_data::{MouseButton, MouseButtonSet};
use dioxus::html::SerializedHtmlEventConverter;
use dioxus::prelude::*;
use site_nav::layout::{destinations, wide_items};
use site_nav::nav_tree::NAV_TREE;
use site_nav::NavigationBar;

/// Viewport classification handed to the shell. `None` leaves detection to the bar.
#[derive(Clone, Copy)]
struct ForcedViewport(Option<bool>);

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Landing {},
        #[route("/:..segments")]
        Elsewhere { segments: Vec<String> },
}

#[component]
fn Shell() -> Element {
    let ForcedViewport(forced) = use_context::<ForcedViewport>();
    let compact: ReadOnlySignal<bool> = use_signal(|| forced.unwrap_or_default()).into();

    rsx! {
        if forced.is_some() {
            NavigationBar { compact: compact }
        } else {
            NavigationBar {}
        }
        Outlet::<Route> {}
    }
}

#[component]
fn Landing() -> Element {
    rsx! { main { "landing" } }
}

#[component]
fn Elsewhere(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! { main { "{path}" } }
}

fn site(forced: Option<bool>) -> Element {
    use_context_provider(|| ForcedViewport(forced));
    rsx! { Router::<Route> {} }
}

fn compact_site() -> Element {
    site(Some(true))
}

fn wide_site() -> Element {
    site(Some(false))
}

fn detected_site() -> Element {
    site(None)
}

fn listeners(mutations: &Mutations, event: &str) -> Vec<ElementId> {
    mutations
        .edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name == event => Some(*id),
            _ => None,
        })
        .collect()
}

/// Router links carry a `mounted` listener next to `click`; plain buttons only `click`.
fn clickable(mutations: &Mutations, links: bool) -> Vec<ElementId> {
    let mounted = listeners(mutations, "mounted");
    listeners(mutations, "click")
        .into_iter()
        .filter(|id| mounted.contains(id) == links)
        .collect()
}

fn primary_click(dom: &mut VirtualDom, target: ElementId) {
    let origin = Coordinates::new(
        ScreenPoint::new(0.0, 0.0),
        ClientPoint::new(0.0, 0.0),
        ElementPoint::new(0.0, 0.0),
        PagePoint::new(0.0, 0.0),
    );
    let data = SerializedMouseData::new(
        Some(MouseButton::Primary),
        MouseButtonSet::empty(),
        origin,
        Modifiers::empty(),
    );
    let event = Event::new(
        Rc::new(PlatformEventData::new(Box::new(data))) as Rc<dyn Any>,
        true,
    );
    dom.runtime().handle_event("click", event, target);
    dom.process_events();
}

fn mount(app: fn() -> Element) -> (VirtualDom, Mutations) {
    set_event_converter(Box::new(SerializedHtmlEventConverter));
    let mut dom = VirtualDom::new(app);
    let mutations = dom.rebuild_to_vec();
    (dom, mutations)
}

#[test]
fn test_compact_bar_is_elevated_with_toggle_and_closed_panel() {
    let (dom, mutations) = mount(compact_site);
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("navbar navbar--elevated"), "{html}");
    assert!(html.contains("navbar-toggle"));
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(!html.contains("compact-menu"));
    assert!(!html.contains("nav-menu"));
    assert_eq!(clickable(&mutations, false).len(), 1);
}

#[test]
fn test_toggle_opens_panel_and_link_closes_it() {
    let (mut dom, mutations) = mount(compact_site);
    let toggle = clickable(&mutations, false)[0];

    primary_click(&mut dom, toggle);
    let opened = dom.render_immediate_to_vec();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("compact-menu"), "{html}");
    assert!(html.contains("compact-group-header"));
    assert!(!html.contains("compact-group-links"));
    assert!(html.contains(r#"aria-expanded="true""#));

    let links = clickable(&opened, true);
    assert_eq!(links.len(), 4, "Home, About, Research and Publications");
    let headers = clickable(&opened, false);
    assert_eq!(headers.len(), 2, "one header per group");

    primary_click(&mut dom, headers[0]);
    let expanded = dom.render_immediate_to_vec();
    assert!(dioxus_ssr::render(&dom).contains("compact-group-links"));
    assert_eq!(clickable(&expanded, true).len(), 3);

    primary_click(&mut dom, links[0]);
    dom.render_immediate_to_vec();
    let html = dioxus_ssr::render(&dom);
    assert!(!html.contains("compact-menu"), "{html}");
    assert!(!html.contains("compact-group-links"));
    assert!(html.contains("navbar-toggle"));
}

#[test]
fn test_wide_bar_is_transparent_and_links_every_destination() {
    let (dom, mutations) = mount(wide_site);
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("navbar navbar--transparent"), "{html}");
    assert!(!html.contains("navbar-toggle"));
    assert!(!html.contains("compact-menu"));
    assert!(html.contains("nav-menu"));
    assert_eq!(html.matches("flyout-panel").count(), 2);
    assert!(clickable(&mutations, false).is_empty());

    let targets = destinations(&wide_items(NAV_TREE));
    assert_eq!(targets.len(), 10);
    for target in targets {
        let href = format!(r#"href="{}""#, target.href());
        assert!(html.contains(&href), "missing {href}");
    }
}

#[test]
fn test_bar_without_override_uses_detected_viewport() {
    // No window in native tests, so detection reports a wide viewport.
    let (dom, _) = mount(detected_site);
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("navbar navbar--transparent"), "{html}");
    assert!(html.contains("nav-menu"));
    assert!(!html.contains("navbar-toggle"));
}
