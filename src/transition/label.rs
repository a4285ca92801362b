//! Overlay caption chosen from the destination URL.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayLabel {
    About,
    Game,
    Services,
    Home,
}

impl OverlayLabel {
    /// First match wins: `about`, then `game`, then `services`; otherwise `Home`.
    pub fn for_destination(url: &str) -> Self {
        if url.contains("about") {
            OverlayLabel::About
        } else if url.contains("game") {
            OverlayLabel::Game
        } else if url.contains("services") {
            OverlayLabel::Services
        } else {
            OverlayLabel::Home
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            OverlayLabel::About => "ABOUT US",
            OverlayLabel::Game => "GAME",
            OverlayLabel::Services => "SERVICES",
            OverlayLabel::Home => "HOME",
        }
    }
}
