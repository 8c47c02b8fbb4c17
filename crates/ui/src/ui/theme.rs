use gpui::{rgb, App, Global, Rgba};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub bg: Rgba,
    pub surface: Rgba,
    pub surface_secondary: Rgba,
    pub border: Rgba,
    pub fg: Rgba,
    pub fg_muted: Rgba,
    pub fg_disabled: Rgba,
    pub accent: Rgba,
    pub danger: Rgba,
    pub stat_songs: Rgba,
    pub stat_artists: Rgba,
    pub stat_genres: Rgba,
    pub stat_filtered: Rgba,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: rgb(0x111018),
            surface: rgb(0x1c1a26),
            surface_secondary: rgb(0x2a2738),
            border: rgb(0x3a3650),
            fg: rgb(0xffffff),
            fg_muted: rgb(0x9a96ad),
            fg_disabled: rgb(0x5f5b70),
            accent: rgb(0x8b5cf6),
            danger: rgb(0xef4444),
            stat_songs: rgb(0xc084fc),
            stat_artists: rgb(0x60a5fa),
            stat_genres: rgb(0x4ade80),
            stat_filtered: rgb(0xfacc15),
        }
    }
}

impl Global for Theme {}

pub trait ActiveTheme {
    fn theme(&self) -> &Theme;
}

impl ActiveTheme for App {
    fn theme(&self) -> &Theme {
        self.global::<Theme>()
    }
}
