use tr::tr;
use web_sys::HtmlAudioElement;
use yew::{html, Component, ComponentLink, Html, MouseEvent, NodeRef, ShouldRender};

use crate::audio::{AudioController, BOOST_VOLUME};
use crate::components::dialog::{Dialog, DialogState};

/// The envelope only ever opens, it never folds back shut.
#[derive(Default)]
pub struct EnvelopeState {
    is_open: bool,
}

impl EnvelopeState {
    /// Reports whether this call performed the closed→open transition.
    pub fn open(&mut self) -> bool {
        if self.is_open {
            false
        } else {
            self.is_open = true;
            true
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

fn acceptance_message() -> String {
    tr!("Thank you for saying yes, I adore you with all my little heart, let's go pick a place to eaaaat 😸🩶")
}

fn rejection_message() -> String {
    tr!("Critical, fatal and unacceptable error: a 'No' is not accepted as an answer. 😾")
}

fn accept(dialog: &mut DialogState, audio: &mut AudioController) {
    dialog.show(acceptance_message());
    audio.set_volume(BOOST_VOLUME);
}

fn decline(dialog: &mut DialogState) {
    dialog.show(rejection_message());
}

pub enum Msg {
    OpenEnvelope,
    Accept(MouseEvent),
    Decline(MouseEvent),
    CloseDialog,
}

/// The proposal itself: the clickable envelope, the two answer buttons,
/// the response dialog and the background music.
pub struct ProposalPage {
    link: ComponentLink<ProposalPage>,
    audio: AudioController,
    audio_ref: NodeRef,
    dialog: DialogState,
    envelope: EnvelopeState,
}

impl Component for ProposalPage {
    type Message = Msg;
    type Properties = ();

    fn create(_: Self::Properties, link: ComponentLink<Self>) -> Self {
        ProposalPage {
            link,
            audio: AudioController::unbound(),
            audio_ref: NodeRef::default(),
            dialog: DialogState::new(),
            envelope: EnvelopeState::default(),
        }
    }

    fn rendered(&mut self, first_render: bool) {
        if first_render {
            self.audio.bind(self.audio_ref.cast::<HtmlAudioElement>());
        }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        match msg {
            Msg::OpenEnvelope => {
                let newly_opened = self.envelope.open();
                if newly_opened {
                    log!("envelope opened");
                }
                // Playback is requested on every click on the envelope,
                // not just the first one.
                self.audio.play();
                newly_opened
            }
            Msg::Accept(event) => {
                event.stop_propagation();
                accept(&mut self.dialog, &mut self.audio);
                true
            }
            Msg::Decline(event) => {
                event.stop_propagation();
                decline(&mut self.dialog);
                true
            }
            Msg::CloseDialog => {
                self.dialog.hide();
                true
            }
        }
    }

    fn change(&mut self, _props: Self::Properties) -> ShouldRender {
        false
    }

    fn view(&self) -> Html {
        let envelope_class = if self.envelope.is_open() {
            "envelope open"
        } else {
            "envelope"
        };
        html! {
            <>
                <audio ref=self.audio_ref.clone() src="sounds/bgmusic.mp3" preload="auto" />
                <div class=envelope_class onclick=self.link.callback(|_| Msg::OpenEnvelope)>
                    <div class="envelope-flap"></div>
                    <div class="letter">
                        <h1>{ tr!("Will you be my valentine?") }</h1>
                        <div class="toolbar">
                            <button class="primary btn-yes"
                                onclick=self.link.callback(Msg::Accept)>{ tr!("Yes!") }</button>
                            <button class="btn-no"
                                onclick=self.link.callback(Msg::Decline)>{ tr!("No") }</button>
                        </div>
                    </div>
                </div>
                <Dialog visible=self.dialog.is_visible()
                    message=self.dialog.message().to_string()
                    on_close=self.link.callback(|_| Msg::CloseDialog) />
            </>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::DEFAULT_VOLUME;

    #[test]
    fn test_envelope_opens_exactly_once() {
        let mut envelope = EnvelopeState::default();
        assert!(!envelope.is_open());
        assert!(envelope.open());
        assert!(envelope.is_open());
        for _ in 0..10 {
            assert!(!envelope.open());
            assert!(envelope.is_open());
        }
    }

    #[test]
    fn test_accept_shows_the_acceptance_message_and_boosts_the_volume() {
        let mut dialog = DialogState::new();
        let mut audio = AudioController::unbound();
        accept(&mut dialog, &mut audio);
        assert!(dialog.is_visible());
        assert_eq!(dialog.message(), acceptance_message());
        assert_eq!(audio.volume(), BOOST_VOLUME);
    }

    #[test]
    fn test_decline_shows_the_rejection_message_and_keeps_the_volume() {
        let mut dialog = DialogState::new();
        let audio = AudioController::unbound();
        decline(&mut dialog);
        assert!(dialog.is_visible());
        assert_eq!(dialog.message(), rejection_message());
        assert_eq!(audio.volume(), DEFAULT_VOLUME);
    }

    #[test]
    fn test_playback_is_requested_on_every_envelope_click() {
        let mut envelope = EnvelopeState::default();
        let mut audio = AudioController::unbound();
        for clicks in 1..=3 {
            envelope.open();
            audio.play();
            assert_eq!(audio.play_requests(), clicks);
        }
        assert!(envelope.is_open());
    }

    #[test]
    fn test_messages_differ() {
        assert_ne!(acceptance_message(), rejection_message());
        assert!(!acceptance_message().is_empty());
        assert!(!rejection_message().is_empty());
    }

    #[test]
    fn test_answering_keeps_the_envelope_open() {
        let mut envelope = EnvelopeState::default();
        let mut dialog = DialogState::new();
        let mut audio = AudioController::unbound();

        assert!(envelope.open());
        accept(&mut dialog, &mut audio);
        assert!(envelope.is_open());
        dialog.hide();
        assert!(envelope.is_open());
        assert_eq!(dialog.message(), acceptance_message());
    }
}
