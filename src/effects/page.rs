/// Which site page is loaded, read from the `<body>` class markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Home,
    About,
    Game,
    Services,
}

impl PageKind {
    pub fn from_body_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
        let mut kind = PageKind::Home;
        for class in classes {
            match class {
                "about-page" => return PageKind::About,
                "game-page" => kind = PageKind::Game,
                "services-page" => kind = PageKind::Services,
                _ => {}
            }
        }
        kind
    }

    pub fn is_home(self) -> bool {
        self == PageKind::Home
    }

    pub fn is_about(self) -> bool {
        self == PageKind::About
    }
}
