//! Decorative page effects: parallax, staggered reveals, scroll fade-in,
//! hover styling, video autoplay and anchor scrolling.
//!
//! None of these share state with each other or with the intro gate and
//! transition sequencer. Every target is optional; a page without a given
//! element simply skips that effect.

pub mod hover;
pub mod media;
pub mod page;
pub mod parallax;
pub mod reveal;

pub use page::PageKind;

use std::rc::Rc;

use web_sys::Document;

use crate::config::EffectsConfig;
use crate::console;
use crate::dom;
use crate::schedule::Scheduler;

fn page_kind(doc: &Document) -> PageKind {
    let classes = doc.body().map(|b| b.class_name()).unwrap_or_default();
    PageKind::from_body_classes(classes.split_whitespace())
}

/// Wire every effect the current page has targets for. Failures are logged per effect.
pub fn install(doc: &Document, config: &EffectsConfig, scheduler: Rc<dyn Scheduler>) {
    let kind = page_kind(doc);

    if kind.is_home() {
        let slogan = (dom::query_one(doc, ".we-ignite"), dom::query_one(doc, ".ideas"));
        if let (Some(we_ignite), Some(ideas)) = slogan {
            console::report("slogan parallax", parallax::install_slogan(we_ignite, ideas));
        }
    }

    console::report("smooth scroll", media::install_smooth_scroll(doc));

    let videos = dom::query_all(doc, ".video-container");
    if !videos.is_empty() && !kind.is_about() {
        console::report("video parallax", parallax::install_videos(videos));
    }

    reveal::play_stagger(doc, &reveal::MAIN_TITLE, &scheduler);
    reveal::play_stagger(doc, &reveal::ABOUT_TITLE, &scheduler);
    reveal::play_frame_lines(doc, &scheduler);
    console::report("fade-in observer", reveal::install_fade_in(doc, config));

    console::report("hover rules", hover::install_rules(doc, hover::HOVER_RULES));
    console::report("video autoplay", media::install_autoplay(doc));

    if kind.is_about() {
        reveal::cascade_transition_delays(doc);
    }

    if let Some(hero) = dom::query_one(doc, ".hero-image") {
        console::report("hero placeholder", media::decorate_hero(doc, &hero));
    }

    if kind.is_about() {
        let blocks = dom::query_all(doc, ".about-gif");
        console::report("cinematic tilt", hover::install_tilt(&blocks));
        console::report("cinematic parallax", parallax::install_cinematic(blocks));
        reveal::play_stagger(doc, &reveal::CINEMATIC_ENTRANCE, &scheduler);
    }
}
