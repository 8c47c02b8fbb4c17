use gpui::{
    div, prelude::*, Context, Entity, EventEmitter, FontWeight, IntoElement, Render,
    SharedString, Subscription, Window,
};
use musichub_core::{NewSong, SongForm};

use super::button::{button, primary_button};
use super::layout::{h_stack, v_stack};
use super::text_field::{TextField, TextFieldEvent};
use super::theme::ActiveTheme;

pub enum AddSongFormEvent {
    Submitted(NewSong),
    Cancelled,
}

pub struct AddSongForm {
    title: Entity<TextField>,
    artist: Entity<TextField>,
    album: Entity<TextField>,
    genre: Entity<TextField>,
    duration: Entity<TextField>,
    year: Entity<TextField>,
    error: Option<SharedString>,
    _subscriptions: Vec<Subscription>,
}

impl EventEmitter<AddSongFormEvent> for AddSongForm {}

impl AddSongForm {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let defaults = SongForm::default();

        let title = cx.new(|cx| TextField::new("Song title", cx));
        let artist = cx.new(|cx| TextField::new("Artist name", cx));
        let album = cx.new(|cx| TextField::new("Album name", cx));
        let genre = cx.new(|cx| TextField::new("Genre", cx));
        let duration = cx.new(|cx| TextField::new("3:45", cx));
        let year = cx.new(|cx| TextField::new("Year", cx).with_text(defaults.year));

        let subscriptions = [&title, &artist, &album, &genre, &duration, &year]
            .into_iter()
            .map(|field| cx.subscribe(field, Self::handle_field_event))
            .collect();

        Self {
            title,
            artist,
            album,
            genre,
            duration,
            year,
            error: None,
            _subscriptions: subscriptions,
        }
    }

    fn handle_field_event(
        &mut self,
        _field: Entity<TextField>,
        event: &TextFieldEvent,
        cx: &mut Context<Self>,
    ) {
        match event {
            TextFieldEvent::Submitted => self.submit(cx),
            TextFieldEvent::Changed(_) => {
                if self.error.take().is_some() {
                    cx.notify();
                }
            }
        }
    }

    fn form(&self, cx: &Context<Self>) -> SongForm {
        let text = |field: &Entity<TextField>| field.read(cx).text().to_string();

        SongForm {
            title: text(&self.title),
            artist: text(&self.artist),
            album: text(&self.album),
            genre: text(&self.genre),
            duration: text(&self.duration),
            year: text(&self.year),
        }
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        match self.form(cx).validate() {
            Ok(new_song) => cx.emit(AddSongFormEvent::Submitted(new_song)),
            Err(e) => {
                self.error = Some(e.to_string().into());
                cx.notify();
            }
        }
    }

    fn cancel(&mut self, cx: &mut Context<Self>) {
        cx.emit(AddSongFormEvent::Cancelled);
    }
}

fn labeled(label: &'static str, field: Entity<TextField>) -> impl IntoElement {
    v_stack()
        .flex_1()
        .gap_1()
        .child(div().text_sm().child(label))
        .child(field)
}

impl Render for AddSongForm {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = *cx.theme();

        v_stack()
            .gap_3()
            .p_4()
            .rounded_lg()
            .border_1()
            .border_color(theme.accent)
            .bg(theme.surface)
            .child(
                v_stack()
                    .gap_1()
                    .child(
                        div()
                            .text_lg()
                            .font_weight(FontWeight::SEMIBOLD)
                            .child("Add New Song"),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(theme.fg_muted)
                            .child("Fill in the details to add a new song to the library."),
                    ),
            )
            .child(
                h_stack()
                    .gap_3()
                    .child(labeled("Title", self.title.clone()))
                    .child(labeled("Artist", self.artist.clone())),
            )
            .child(
                h_stack()
                    .gap_3()
                    .child(labeled("Album", self.album.clone()))
                    .child(labeled("Genre", self.genre.clone())),
            )
            .child(
                h_stack()
                    .gap_3()
                    .child(labeled("Duration", self.duration.clone()))
                    .child(labeled("Year", self.year.clone())),
            )
            .when_some(self.error.clone(), |this, error| {
                this.child(div().text_sm().text_color(theme.danger).child(error))
            })
            .child(
                h_stack()
                    .gap_2()
                    .justify_end()
                    .child(button("cancel-add-song", "Cancel", cx).on_click(cx.listener(
                        |this, _event, _window, cx| {
                            this.cancel(cx);
                        },
                    )))
                    .child(primary_button("submit-add-song", "Add Song", cx).on_click(
                        cx.listener(|this, _event, _window, cx| {
                            this.submit(cx);
                        }),
                    )),
            )
    }
}
