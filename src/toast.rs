//! Tiny toast / notification helper.
//!
//! Renders the single currently-visible [`Notification`] into a fixed
//! `#toast-root` container.  Lifetime is owned by the reducer (a dismiss
//! message scheduled per show), so this module only mirrors state into the
//! DOM: show replaces whatever was there, clear empties the container.

use web_sys::{Document, Element};

use crate::models::{Notification, NotificationKind};

pub fn render(document: &Document, notification: Option<&Notification>) {
    let root = match ensure_root(document) {
        Some(r) => r,
        None => return,
    };

    root.set_inner_html("");

    if let Some(n) = notification {
        let toast = match document.create_element("div") {
            Ok(el) => el,
            Err(_) => return,
        };
        toast.set_class_name(match n.kind {
            NotificationKind::Success => "toast toast-success",
            NotificationKind::Error => "toast toast-error",
        });
        toast.set_text_content(Some(&n.message));
        let _ = root.append_child(&toast);
    }

    ensure_styles(document);
}

fn ensure_root(document: &Document) -> Option<Element> {
    if let Some(el) = document.get_element_by_id("toast-root") {
        return Some(el);
    }
    let root = document.create_element("div").ok()?;
    root.set_id("toast-root");
    root.set_class_name("toast-root");
    document.body()?.append_child(&root).ok()?;
    Some(root)
}

fn ensure_styles(document: &Document) {
    if document.get_element_by_id("toast-styles").is_some() {
        return;
    }

    let css = "
.toast-root{position:fixed;bottom:20px;right:20px;display:flex;flex-direction:column;gap:8px;z-index:9999;font-family:Arial,Helvetica,sans-serif}
.toast{padding:12px 16px;border-radius:8px;color:#fff;box-shadow:0 4px 12px rgba(0,0,0,.15);opacity:0;animation:toast-in .2s forwards}
.toast-success{background:#48bb78}
.toast-error{background:#f56565}
@keyframes toast-in{to{opacity:1}}
";

    if let Ok(style) = document.create_element("style") {
        style.set_id("toast-styles");
        style.set_text_content(Some(css));
        if let Ok(Some(head)) = document.query_selector("head") {
            let _ = head.append_child(&style);
        } else if let Some(body) = document.body() {
            let _ = body.append_child(&style);
        }
    }
}
