use gpui::{
    div, prelude::*, px, uniform_list, Context, Entity, EventEmitter, IntoElement, Render,
    SharedString, Subscription, UniformListScrollHandle, Window,
};
use musichub_core::{Catalog, FileSession, Identity, SongId};

use super::button::button;
use super::layout::{h_stack, v_stack};
use super::theme::ActiveTheme;

pub enum ListViewEvent {
    DeleteRequested(SongId),
}

/// The filtered and sorted song list, one row per song.
pub struct ListView {
    catalog: Entity<Catalog>,
    session: Entity<FileSession>,
    scroll_handle: UniformListScrollHandle,
    _subscriptions: Vec<Subscription>,
}

impl EventEmitter<ListViewEvent> for ListView {}

impl ListView {
    pub fn new(
        catalog: Entity<Catalog>,
        session: Entity<FileSession>,
        cx: &mut Context<Self>,
    ) -> Self {
        let subscriptions = vec![cx.observe(&catalog, |_this, _catalog, cx| cx.notify())];

        Self {
            catalog,
            session,
            scroll_handle: UniformListScrollHandle::new(),
            _subscriptions: subscriptions,
        }
    }

    fn render_empty(&self, can_delete: bool, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = *cx.theme();
        let hint = if can_delete {
            "Try adjusting your filters or add some new songs"
        } else {
            "Try adjusting your filters or check back later"
        };

        v_stack()
            .size_full()
            .items_center()
            .justify_center()
            .gap_2()
            .child(
                div()
                    .text_lg()
                    .text_color(theme.fg)
                    .child("No songs found"),
            )
            .child(div().text_sm().text_color(theme.fg_muted).child(hint))
    }
}

impl Render for ListView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = *cx.theme();
        let can_delete = self
            .session
            .read(cx)
            .identity()
            .is_some_and(Identity::is_admin);

        let songs = self.catalog.read(cx).filtered_sorted();
        let song_count = songs.len();

        if song_count == 0 {
            return div().size_full().child(self.render_empty(can_delete, cx));
        }

        let list_view = cx.entity();

        let header = h_stack()
            .w_full()
            .h_6()
            .items_center()
            .gap_2()
            .px_2()
            .text_xs()
            .text_color(theme.fg_muted)
            .child(div().flex_1().child("Title"))
            .child(div().w(px(160.)).child("Artist"))
            .child(div().w(px(180.)).child("Album"))
            .child(div().w(px(90.)).child("Genre"))
            .child(div().w(px(48.)).child("Year"))
            .child(div().w(px(48.)).child("Time"))
            .when(can_delete, |this| this.child(div().w(px(64.))));

        div().size_full().flex().flex_col().child(header).child(
            uniform_list("song-list", song_count, {
                move |range, _window, cx| {
                    let theme = *cx.theme();
                    let mut items = Vec::new();

                    for ix in range {
                        if let Some(song) = songs.get(ix) {
                            let title: SharedString = song.title.clone().into();
                            let artist: SharedString = song.artist.clone().into();
                            let album: SharedString = song.album.clone().into();
                            let genre: SharedString = song.genre.clone().into();
                            let year: SharedString = song.year.to_string().into();
                            let duration: SharedString = song.duration.clone().into();
                            let id = song.id.clone();
                            let list_view = list_view.clone();

                            let delete = button(("delete-song", ix), "Delete", cx)
                                .w(px(64.))
                                .text_xs()
                                .text_color(theme.danger)
                                .on_click(move |_event, _window, cx| {
                                    list_view.update(cx, |_list_view, cx| {
                                        cx.emit(ListViewEvent::DeleteRequested(id.clone()));
                                    });
                                });

                            items.push(
                                div()
                                    .id(ix)
                                    .h_8()
                                    .items_center()
                                    .flex()
                                    .w_full()
                                    .gap_2()
                                    .px_2()
                                    .hover(move |style| style.bg(theme.surface_secondary))
                                    .child(
                                        div()
                                            .flex_1()
                                            .text_sm()
                                            .text_color(theme.fg)
                                            .child(title),
                                    )
                                    .child(
                                        div()
                                            .w(px(160.))
                                            .text_xs()
                                            .text_color(theme.fg_muted)
                                            .child(artist),
                                    )
                                    .child(
                                        div()
                                            .w(px(180.))
                                            .text_xs()
                                            .text_color(theme.fg_muted)
                                            .child(album),
                                    )
                                    .child(
                                        div()
                                            .w(px(90.))
                                            .text_xs()
                                            .text_color(theme.fg_muted)
                                            .child(genre),
                                    )
                                    .child(div().w(px(48.)).text_xs().child(year))
                                    .child(div().w(px(48.)).text_xs().child(duration))
                                    .when(can_delete, |this| this.child(delete)),
                            );
                        }
                    }

                    items
                }
            })
            .track_scroll(self.scroll_handle.clone())
            .flex_1(),
        )
    }
}
