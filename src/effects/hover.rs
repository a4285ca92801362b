//! Pointer effects: a table of hover style rules and the magnetic tilt on
//! cinematic blocks.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::dom;
use crate::error::Result;

type Styles = &'static [(&'static str, &'static str)];

/// Styles applied on `mouseenter` / `mouseleave`, either to the hovered
/// element itself or to its first descendant matching `child`.
#[derive(Clone, Copy, Debug)]
pub struct HoverRule {
    pub selector: &'static str,
    pub child: Option<&'static str>,
    pub enter: Styles,
    pub leave: Styles,
}

pub const HOVER_RULES: &[HoverRule] = &[
    HoverRule {
        selector: ".cta-button",
        child: None,
        enter: &[("box-shadow", "0 8px 25px rgba(10, 139, 139, 0.3)")],
        leave: &[("box-shadow", "0 4px 15px rgba(10, 139, 139, 0.2)")],
    },
    HoverRule {
        selector: "nav a",
        child: None,
        enter: &[("transform", "translateX(3px)"), ("transition", "transform 0.3s ease")],
        leave: &[("transform", "")],
    },
    HoverRule {
        selector: ".team-member",
        child: None,
        enter: &[
            ("transform", "translateY(-5px)"),
            ("box-shadow", "0 15px 40px rgba(58, 48, 41, 0.15)"),
            ("border-color", "#e85e3a"),
        ],
        leave: &[("transform", ""), ("box-shadow", ""), ("border-color", "transparent")],
    },
    HoverRule {
        selector: ".value-item",
        child: Some(".value-icon"),
        enter: &[("transform", "scale(1.1)"), ("transition", "transform 0.3s ease")],
        leave: &[("transform", "")],
    },
];

/// Degrees of `(rotateX, rotateY)` for a pointer at `(x, y)` inside a
/// `width`×`height` box. `None` for a degenerate box.
pub fn tilt(x: f64, y: f64, width: f64, height: f64) -> Option<(f64, f64)> {
    let (cx, cy) = (width / 2.0, height / 2.0);
    if cx <= 0.0 || cy <= 0.0 {
        return None;
    }
    let dx = (x - cx) / cx;
    let dy = (y - cy) / cy;
    Some((dy * -10.0, dx * 10.0))
}

pub fn tilt_transform(rotate_x: f64, rotate_y: f64) -> String {
    format!(
        "translateY(-10px) scale(1.02) perspective(1000px) rotateX({}deg) rotateY({}deg)",
        rotate_x, rotate_y
    )
}

// --- DOM ---------------------------------------------------------------------

fn listen<F>(el: &HtmlElement, event: &str, handler: F) -> Result<()>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn rule_target(el: &HtmlElement, rule: &HoverRule) -> Option<HtmlElement> {
    match rule.child {
        Some(child) => dom::query_child(el, child),
        None => Some(el.clone()),
    }
}

pub fn install_rules(doc: &Document, rules: &[HoverRule]) -> Result<()> {
    for rule in rules {
        let rule = *rule;
        for el in dom::query_all(doc, rule.selector) {
            let host = el.clone();
            listen(&el, "mouseenter", move |_| {
                if let Some(target) = rule_target(&host, &rule) {
                    dom::apply_styles(&target, rule.enter);
                }
            })?;
            let host = el.clone();
            listen(&el, "mouseleave", move |_| {
                if let Some(target) = rule_target(&host, &rule) {
                    dom::apply_styles(&target, rule.leave);
                }
            })?;
        }
    }
    Ok(())
}

pub fn install_tilt(blocks: &[HtmlElement]) -> Result<()> {
    for block in blocks {
        let host = block.clone();
        listen(block, "mousemove", move |evt| {
            let rect = host.get_bounding_client_rect();
            let x = evt.client_x() as f64 - rect.left();
            let y = evt.client_y() as f64 - rect.top();
            if let Some((rx, ry)) = tilt(x, y, rect.width(), rect.height()) {
                dom::set_style(&host, "transform", &tilt_transform(rx, ry));
            }
        })?;
        let host = block.clone();
        listen(block, "mouseleave", move |_| dom::set_style(&host, "transform", ""))?;
    }
    Ok(())
}
