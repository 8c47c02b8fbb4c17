use gpui::prelude::*;
use gpui::*;
use musichub_core::{seed_catalog, Config, FileSession, FileStore, SessionStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{ActiveTheme, LibraryView, LoginView};

enum Screen {
    Login(Entity<LoginView>),
    Library(Entity<LibraryView>),
}

struct MusicHub {
    config: Config,
    session: Entity<FileSession>,
    screen: Screen,
    _subscriptions: Vec<Subscription>,
}

impl MusicHub {
    fn new(config: Config, cx: &mut Context<Self>) -> Self {
        let store = FileStore::new(config.session_path());
        let session = cx.new(|_cx| SessionStore::restore(store));
        let screen = Self::screen_for(&config, &session, cx);

        let subscriptions = vec![cx.observe(&session, Self::handle_session_changed)];

        MusicHub {
            config,
            session,
            screen,
            _subscriptions: subscriptions,
        }
    }

    /// Login screen when signed out; otherwise a library view over a freshly
    /// seeded catalog.
    fn screen_for(config: &Config, session: &Entity<FileSession>, cx: &mut Context<Self>) -> Screen {
        if session.read(cx).is_authenticated() {
            let catalog = seed_catalog(config.seed_catalog.as_deref());
            let session = session.clone();
            Screen::Library(cx.new(|cx| LibraryView::new(session, catalog, cx)))
        } else {
            let session = session.clone();
            Screen::Login(cx.new(|cx| LoginView::new(session, cx)))
        }
    }

    fn handle_session_changed(&mut self, session: Entity<FileSession>, cx: &mut Context<Self>) {
        let authenticated = session.read(cx).is_authenticated();

        let stale = match self.screen {
            Screen::Login(_) => authenticated,
            Screen::Library(_) => !authenticated,
        };

        if stale {
            self.screen = Self::screen_for(&self.config, &self.session, cx);
            cx.notify();
        }
    }
}

impl Render for MusicHub {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = *cx.theme();

        div()
            .size_full()
            .bg(theme.bg)
            .text_color(theme.fg)
            .map(|this| match &self.screen {
                Screen::Login(view) => this.child(view.clone()),
                Screen::Library(view) => this.child(view.clone()),
            })
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "musichub=info,musichub_core=info,ui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load();
    tracing::info!(data_dir = %config.data_dir().display(), "Starting MusicHub");

    Application::new().run(move |cx: &mut App| {
        ui::init(cx);

        if let Err(e) = cx.open_window(WindowOptions::default(), |_window, cx| {
            cx.new(|cx| MusicHub::new(config, cx))
        }) {
            tracing::error!("Failed to open window: {}", e);
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
