use gpui::{
    div, prelude::*, App, Context, Entity, FontWeight, IntoElement, Render, Rgba, Subscription,
    Window,
};
use musichub_core::{AccessError, Catalog, FileSession, Identity, RequireAdmin, SongId};

use super::add_song_form::{AddSongForm, AddSongFormEvent};
use super::button::{button, primary_button};
use super::filter_bar::FilterBar;
use super::layout::{h_stack, v_stack};
use super::list_view::{ListView, ListViewEvent};
use super::theme::ActiveTheme;

/// The signed-in screen: header, stats, filters and the song list.
///
/// Owns the catalog for as long as the session lasts. Add and delete go
/// through [`RequireAdmin`] before touching it.
pub struct LibraryView {
    session: Entity<FileSession>,
    catalog: Entity<Catalog>,
    filter_bar: Entity<FilterBar>,
    list_view: Entity<ListView>,
    add_song_form: Option<(Entity<AddSongForm>, Subscription)>,
    _subscriptions: Vec<Subscription>,
}

impl LibraryView {
    pub fn new(session: Entity<FileSession>, catalog: Catalog, cx: &mut Context<Self>) -> Self {
        let catalog = cx.new(|_cx| catalog);
        let filter_bar = cx.new(|cx| FilterBar::new(catalog.clone(), cx));
        let list_view = cx.new(|cx| ListView::new(catalog.clone(), session.clone(), cx));

        let subscriptions = vec![
            cx.observe(&catalog, |_this, _catalog, cx| cx.notify()),
            cx.subscribe(&list_view, Self::handle_list_view_event),
        ];

        Self {
            session,
            catalog,
            filter_bar,
            list_view,
            add_song_form: None,
            _subscriptions: subscriptions,
        }
    }

    fn require_admin(&self, cx: &App) -> Result<(), AccessError> {
        RequireAdmin::check(self.session.read(cx)).map(|_| ())
    }

    fn handle_list_view_event(
        &mut self,
        _list_view: Entity<ListView>,
        event: &ListViewEvent,
        cx: &mut Context<Self>,
    ) {
        match event {
            ListViewEvent::DeleteRequested(id) => self.delete_song(id, cx),
        }
    }

    fn handle_add_song_form_event(
        &mut self,
        _form: Entity<AddSongForm>,
        event: &AddSongFormEvent,
        cx: &mut Context<Self>,
    ) {
        match event {
            AddSongFormEvent::Submitted(new_song) => {
                if let Err(e) = self.require_admin(cx) {
                    tracing::warn!("Add song refused: {}", e);
                } else {
                    let new_song = new_song.clone();
                    self.catalog.update(cx, |catalog, cx| {
                        catalog.add_song(new_song);
                        cx.notify();
                    });
                }
                self.close_add_song_form(cx);
            }
            AddSongFormEvent::Cancelled => self.close_add_song_form(cx),
        }
    }

    fn delete_song(&mut self, id: &SongId, cx: &mut Context<Self>) {
        if let Err(e) = self.require_admin(cx) {
            tracing::warn!(%id, "Delete refused: {}", e);
            return;
        }

        self.catalog.update(cx, |catalog, cx| {
            catalog.delete_song(id);
            cx.notify();
        });
    }

    fn open_add_song_form(&mut self, cx: &mut Context<Self>) {
        if self.require_admin(cx).is_err() || self.add_song_form.is_some() {
            return;
        }

        let form = cx.new(AddSongForm::new);
        let subscription = cx.subscribe(&form, Self::handle_add_song_form_event);
        self.add_song_form = Some((form, subscription));
        cx.notify();
    }

    fn close_add_song_form(&mut self, cx: &mut Context<Self>) {
        if self.add_song_form.take().is_some() {
            cx.notify();
        }
    }

    fn sign_out(&mut self, cx: &mut Context<Self>) {
        self.session.update(cx, |session, cx| {
            session.logout();
            cx.notify();
        });
    }
}

fn stat_card(value: String, label: &'static str, color: Rgba, cx: &App) -> impl IntoElement {
    let theme = cx.theme();

    v_stack()
        .flex_1()
        .gap_1()
        .p_4()
        .rounded_lg()
        .border_1()
        .border_color(theme.border)
        .bg(theme.surface)
        .child(
            div()
                .text_2xl()
                .font_weight(FontWeight::BOLD)
                .text_color(color)
                .child(value),
        )
        .child(div().text_sm().text_color(theme.fg_muted).child(label))
}

impl Render for LibraryView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = *cx.theme();

        let identity = self.session.read(cx).identity().cloned();
        let is_admin = identity.as_ref().is_some_and(Identity::is_admin);
        let welcome = match &identity {
            Some(identity) => format!("Welcome back, {} ({})", identity.username, identity.role),
            None => "Welcome back".to_string(),
        };

        let catalog = self.catalog.read(cx);
        let stats = catalog.stats();
        let filtered = catalog.filtered_sorted().len();

        let header = h_stack()
            .items_center()
            .justify_between()
            .child(
                v_stack()
                    .gap_1()
                    .child(
                        div()
                            .text_3xl()
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.accent)
                            .child("MusicHub Library"),
                    )
                    .child(div().text_sm().text_color(theme.fg_muted).child(welcome)),
            )
            .child(
                h_stack()
                    .gap_2()
                    .when(is_admin, |this| {
                        this.child(primary_button("add-song", "Add Song", cx).on_click(
                            cx.listener(|this, _event, _window, cx| {
                                this.open_add_song_form(cx);
                            }),
                        ))
                    })
                    .child(button("sign-out", "Sign Out", cx).on_click(cx.listener(
                        |this, _event, _window, cx| {
                            this.sign_out(cx);
                        },
                    ))),
            );

        let stats_row = h_stack()
            .gap_4()
            .child(stat_card(
                stats.total_songs.to_string(),
                "Total Songs",
                theme.stat_songs,
                cx,
            ))
            .child(stat_card(
                stats.total_artists.to_string(),
                "Artists",
                theme.stat_artists,
                cx,
            ))
            .child(stat_card(
                stats.total_genres.to_string(),
                "Genres",
                theme.stat_genres,
                cx,
            ))
            .child(stat_card(
                filtered.to_string(),
                "Filtered Results",
                theme.stat_filtered,
                cx,
            ))
            .child(stat_card(
                stats.most_popular_artist,
                "Most Popular Artist",
                theme.accent,
                cx,
            ));

        v_stack()
            .size_full()
            .gap_4()
            .p_6()
            .bg(theme.bg)
            .text_color(theme.fg)
            .child(header)
            .child(stats_row)
            .child(self.filter_bar.clone())
            .when_some(
                self.add_song_form.as_ref().map(|(form, _)| form.clone()),
                |this, form| this.child(form),
            )
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .rounded_lg()
                    .border_1()
                    .border_color(theme.border)
                    .bg(theme.surface)
                    .child(self.list_view.clone()),
            )
    }
}
