use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;
use weblog::console_warn;

/// Startup volume, kept low so the music does not startle anyone.
pub const DEFAULT_VOLUME: f64 = 0.4;
/// Volume after an affirmative answer.
pub const BOOST_VOLUME: f64 = 0.8;

/// Wraps the page's background music element.
///
/// The element is optional: a page without music keeps working, every
/// operation degrades to a no-op on the platform side. Volume and the
/// number of play requests are tracked here either way, the element
/// only mirrors them.
pub struct AudioController {
    audio: Option<HtmlAudioElement>,
    volume: f64,
    play_requests: u32,
}

impl AudioController {
    pub fn unbound() -> Self {
        Self {
            audio: None,
            volume: DEFAULT_VOLUME,
            play_requests: 0,
        }
    }

    /// Adopts the audio element once the page has rendered it.
    pub fn bind(&mut self, audio: Option<HtmlAudioElement>) {
        match audio {
            Some(audio) => {
                audio.set_volume(self.volume);
                audio.set_loop(true);
                self.audio = Some(audio);
            }
            None => {
                #[cfg(target_arch = "wasm32")]
                console_warn!("no audio element found, the page stays silent");
            }
        }
    }

    pub fn is_bound(&self) -> bool {
        self.audio.is_some()
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn play_requests(&self) -> u32 {
        self.play_requests
    }

    /// Requests playback, fire-and-forget. Browsers may refuse until the
    /// user has interacted with the page; the refusal is only logged.
    pub fn play(&mut self) {
        self.play_requests += 1;
        if let Some(ref audio) = self.audio {
            match audio.play() {
                Ok(promise) => spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        console_warn!("the browser blocked autoplay, interaction needed first", err);
                    }
                }),
                Err(err) => console_warn!("could not request playback", err),
            }
        }
    }

    pub fn pause(&self) {
        if let Some(ref audio) = self.audio {
            let _ = audio.pause();
        }
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
        if let Some(ref audio) = self.audio {
            audio.set_volume(volume);
        }
    }
}
