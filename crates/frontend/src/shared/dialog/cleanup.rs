//! Self-healing pass that removes overlay leftovers once no dialog is active.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MutationObserver, MutationObserverInit, MutationRecord};

/// Portal roots, dialog surfaces and backdrops
pub const OVERLAY_SELECTORS: [&str; 3] = [
    "[data-dialog-portal]",
    "[role='dialog']",
    ".dialog-backdrop",
];

/// Body styles dialogs set while open
pub const LOCKED_BODY_PROPERTIES: [&str; 2] = ["overflow", "pointer-events"];

const ORPHAN_SELECTOR: &str = "[role='dialog']";

/// Document access needed by the cleanup pass
pub trait OverlayHost {
    type Node;

    /// Attached nodes matching `selector`, in document order
    fn query(&self, selector: &str) -> Vec<Self::Node>;
    /// Node is, or contains, the focused element
    fn contains_focus(&self, node: &Self::Node) -> bool;
    fn has_children(&self, node: &Self::Node) -> bool;
    /// Returns `false` if the node was already detached
    fn remove(&self, node: &Self::Node) -> bool;
    fn body_style(&self, property: &str) -> String;
    fn clear_body_style(&self, property: &str);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrubReport {
    pub removed: usize,
    pub kept_for_focus: usize,
    pub styles_reset: usize,
}

impl ScrubReport {
    pub fn is_clean(&self) -> bool {
        self.removed == 0 && self.styles_reset == 0
    }
}

/// Removes overlay nodes that do not hold focus and resets body style overrides.
///
/// Running it twice in a row leaves the second report clean.
pub fn scrub<H: OverlayHost>(host: &H) -> ScrubReport {
    let mut report = ScrubReport::default();

    for selector in OVERLAY_SELECTORS {
        for node in host.query(selector) {
            if host.contains_focus(&node) {
                report.kept_for_focus += 1;
                continue;
            }
            if host.remove(&node) {
                report.removed += 1;
            }
        }
    }

    for property in LOCKED_BODY_PROPERTIES {
        if !host.body_style(property).is_empty() {
            host.clear_body_style(property);
            report.styles_reset += 1;
        }
    }

    report
}

/// Removes dialog surfaces left without any content
pub fn remove_orphans<H: OverlayHost>(host: &H) -> usize {
    host.query(ORPHAN_SELECTOR)
        .into_iter()
        .filter(|node| !host.has_children(node))
        .filter(|node| host.remove(node))
        .count()
}

// ============================================================================
// Browser implementation
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserOverlayHost;

impl BrowserOverlayHost {
    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    fn body() -> Option<HtmlElement> {
        Self::document()?.body()
    }
}

impl OverlayHost for BrowserOverlayHost {
    type Node = Element;

    fn query(&self, selector: &str) -> Vec<Element> {
        let Some(list) = Self::document().and_then(|d| d.query_selector_all(selector).ok())
        else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn contains_focus(&self, node: &Element) -> bool {
        Self::document()
            .and_then(|d| d.active_element())
            .map(|focused| {
                let focused: &web_sys::Node = focused.as_ref();
                node.contains(Some(focused))
            })
            .unwrap_or(false)
    }

    fn has_children(&self, node: &Element) -> bool {
        node.child_element_count() > 0
    }

    fn remove(&self, node: &Element) -> bool {
        if !node.is_connected() {
            return false;
        }
        node.remove();
        true
    }

    fn body_style(&self, property: &str) -> String {
        Self::body()
            .and_then(|b| b.style().get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn clear_body_style(&self, property: &str) {
        if let Some(body) = Self::body() {
            let _ = body.style().remove_property(property);
        }
    }
}

/// Runs [`scrub`] on the live document and logs what it removed
pub fn scrub_document() -> ScrubReport {
    let report = scrub(&BrowserOverlayHost);
    if !report.is_clean() {
        log::info!(
            "dialog cleanup: removed {} overlay node(s), reset {} body style(s)",
            report.removed,
            report.styles_reset
        );
    }
    report
}

pub fn lock_body_scroll() {
    if let Some(body) = BrowserOverlayHost::body() {
        let _ = body.style().set_property("overflow", "hidden");
    }
}

pub fn unlock_body_scroll() {
    BrowserOverlayHost.clear_body_style("overflow");
}

/// Watches the body for removals and drops `[role='dialog']` nodes left empty.
pub fn observe_orphans() -> Option<MutationObserver> {
    let callback = Closure::wrap(Box::new(move |records: js_sys::Array, _: MutationObserver| {
        let removed_any = records
            .iter()
            .filter_map(|r| r.dyn_into::<MutationRecord>().ok())
            .any(|r| r.removed_nodes().length() > 0);
        if removed_any {
            let removed = remove_orphans(&BrowserOverlayHost);
            if removed > 0 {
                log::info!("dialog cleanup: removed {} empty dialog node(s)", removed);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

    let observer = MutationObserver::new(callback.as_ref().unchecked_ref()).ok()?;
    let body = BrowserOverlayHost::body()?;
    let init = MutationObserverInit::new();
    init.set_child_list(true);
    init.set_subtree(true);
    observer.observe_with_options(&body, &init).ok()?;

    // Lives as long as the observer, which is disconnected only at teardown.
    callback.forget();
    Some(observer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Debug, Clone)]
    struct FakeNode {
        id: usize,
        selectors: Vec<&'static str>,
        parent: Option<usize>,
        children: usize,
        attached: bool,
    }

    #[derive(Default)]
    struct FakeDocument {
        nodes: RefCell<Vec<FakeNode>>,
        focused: Option<usize>,
        body_styles: RefCell<HashMap<String, String>>,
    }

    impl FakeDocument {
        fn add(&self, selectors: Vec<&'static str>, parent: Option<usize>, children: usize) -> usize {
            let mut nodes = self.nodes.borrow_mut();
            let id = nodes.len();
            nodes.push(FakeNode {
                id,
                selectors,
                parent,
                children,
                attached: true,
            });
            id
        }

        fn is_attached(&self, id: usize) -> bool {
            let nodes = self.nodes.borrow();
            let mut current = Some(id);
            while let Some(i) = current {
                if !nodes[i].attached {
                    return false;
                }
                current = nodes[i].parent;
            }
            true
        }

        fn is_ancestor_or_self(&self, ancestor: usize, mut node: usize) -> bool {
            let nodes = self.nodes.borrow();
            loop {
                if node == ancestor {
                    return true;
                }
                match nodes[node].parent {
                    Some(parent) => node = parent,
                    None => return false,
                }
            }
        }

        fn lock_body(&self) {
            let mut styles = self.body_styles.borrow_mut();
            styles.insert("overflow".into(), "hidden".into());
            styles.insert("pointer-events".into(), "none".into());
        }
    }

    impl OverlayHost for FakeDocument {
        type Node = usize;

        fn query(&self, selector: &str) -> Vec<usize> {
            let ids: Vec<usize> = self
                .nodes
                .borrow()
                .iter()
                .filter(|n| n.selectors.contains(&selector))
                .map(|n| n.id)
                .collect();
            ids.into_iter().filter(|id| self.is_attached(*id)).collect()
        }

        fn contains_focus(&self, node: &usize) -> bool {
            self.focused
                .map(|focused| self.is_ancestor_or_self(*node, focused))
                .unwrap_or(false)
        }

        fn has_children(&self, node: &usize) -> bool {
            self.nodes.borrow()[*node].children > 0
        }

        fn remove(&self, node: &usize) -> bool {
            if !self.is_attached(*node) {
                return false;
            }
            self.nodes.borrow_mut()[*node].attached = false;
            true
        }

        fn body_style(&self, property: &str) -> String {
            self.body_styles
                .borrow()
                .get(property)
                .cloned()
                .unwrap_or_default()
        }

        fn clear_body_style(&self, property: &str) {
            self.body_styles.borrow_mut().remove(property);
        }
    }

    fn leaked_portal(doc: &FakeDocument) -> usize {
        let portal = doc.add(vec!["[data-dialog-portal]"], None, 2);
        doc.add(vec![".dialog-backdrop"], Some(portal), 0);
        doc.add(vec!["[role='dialog']"], Some(portal), 1);
        portal
    }

    #[test]
    fn test_scrub_removes_leaked_overlay_and_resets_body() {
        let doc = FakeDocument::default();
        leaked_portal(&doc);
        doc.lock_body();

        let report = scrub(&doc);
        assert_eq!(report.removed, 1);
        assert_eq!(report.styles_reset, 2);
        assert!(doc.query("[role='dialog']").is_empty());
        assert!(doc.body_style("overflow").is_empty());
    }

    #[test]
    fn test_scrub_is_idempotent() {
        let doc = FakeDocument::default();
        leaked_portal(&doc);
        doc.add(vec![".dialog-backdrop"], None, 0);
        doc.lock_body();

        let first = scrub(&doc);
        assert!(!first.is_clean());
        assert_eq!(first.removed, 2);

        let second = scrub(&doc);
        assert!(second.is_clean());
        assert_eq!(second, ScrubReport::default());
    }

    #[test]
    fn test_scrub_keeps_overlay_holding_focus() {
        let mut doc = FakeDocument::default();
        let portal = leaked_portal(&doc);
        let surface = portal + 2;
        let input = doc.add(vec![], Some(surface), 0);
        doc.focused = Some(input);
        let stray = doc.add(vec![".dialog-backdrop"], None, 0);

        let report = scrub(&doc);
        assert_eq!(report.kept_for_focus, 2);
        assert_eq!(report.removed, 2);
        assert!(doc.is_attached(surface));
        assert!(!doc.is_attached(stray));
    }

    #[test]
    fn test_remove_orphans_only_drops_empty_dialogs() {
        let doc = FakeDocument::default();
        let empty = doc.add(vec!["[role='dialog']"], None, 0);
        let filled = doc.add(vec!["[role='dialog']"], None, 3);

        assert_eq!(remove_orphans(&doc), 1);
        assert!(!doc.is_attached(empty));
        assert!(doc.is_attached(filled));
        assert_eq!(remove_orphans(&doc), 0);
    }
}
