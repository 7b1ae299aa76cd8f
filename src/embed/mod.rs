use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::client::VimeoClient;
use crate::data::{self, VideoInfo};
use crate::matcher::VideoId;
use crate::Error;


/// Overlay and orientation preferences, passed through to the player
/// untouched. The embed never interprets these.
#[derive(Clone, Copy, Debug)]
pub struct DisplayPrefs {
    pub show_controls: bool,
    pub allow_fullscreen: bool,
    pub hide_system_overlays: bool,
}

impl Default for DisplayPrefs {
    fn default() -> Self {
        Self {
            show_controls: true,
            allow_fullscreen: true,
            hide_system_overlays: false,
        }
    }
}

/// What the player gets handed once resolution finishes.
///
/// `url` is `None` when nothing playable was found; the player is expected
/// to produce an inert session for that.
#[derive(Clone, Debug)]
pub struct Source {
    pub url: Option<String>,
    pub autoplay: bool,
    pub start_at: Duration,
}

pub type ProgressFn = Box<dyn FnMut(Duration) + Send>;
pub type FinishFn = Box<dyn FnMut() + Send>;

/// The two playback notifications the embed relays to its caller.
#[derive(Default)]
pub struct Observer {
    pub on_progress: Option<ProgressFn>,
    pub on_finish: Option<FinishFn>,
}

/// The external playback collaborator. Implementations own rendering,
/// decoding, seeking, and the playback chrome.
pub trait Player {
    type Session: Session;

    fn spawn(&mut self, source: Source, prefs: &DisplayPrefs) -> Self::Session;
}

/// A live playback session produced by a [`Player`].
pub trait Session {
    /// Register the embed's observer. Called at most once per session.
    fn subscribe(&mut self, observer: Observer);

    /// Stop playback and release whatever the session holds.
    fn stop(&mut self);
}

/// Everything the caller supplies up front.
#[derive(Clone, Debug)]
pub struct EmbedOptions {
    pub url: String,
    pub start_at: Duration,
    pub autoplay: bool,
    pub prefs: DisplayPrefs,
}

impl EmbedOptions {
    pub fn new(url: impl ToString) -> Self {
        Self {
            url: url.to_string(),
            start_at: Duration::ZERO,
            autoplay: false,
            prefs: DisplayPrefs::default(),
        }
    }

    pub fn start_at(mut self, start_at: Duration) -> Self {
        self.start_at = start_at;
        self
    }

    pub fn autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn prefs(mut self, prefs: DisplayPrefs) -> Self {
        self.prefs = prefs;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmbedState {
    /// Constructed, url validated, fetch not started yet.
    Validating,
    /// The config fetch is in flight.
    Fetching,
    /// Resolution finished and a session exists.
    Resolved,
    /// The config could not be fetched. A session still exists, inert.
    Failed,
}

/// Flags the owning embed as torn down, from outside the borrow.
///
/// This carries the deferred-callback contract: once the flag is set, a
/// fetch that completes later applies nothing. The in-flight request is
/// not aborted, its result is just ignored.
#[derive(Clone)]
pub struct DisposeHandle {
    disposed: Arc<AtomicBool>,
}

impl DisposeHandle {
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }
}

/// One embedded vimeo video.
///
/// Construction validates the url and fails fast on a bad one. After that,
/// [`resolve`](Self::resolve) runs the fetch-select-spawn pipeline exactly
/// once. Register callbacks before calling `resolve`; they move into the
/// session when it is created.
pub struct VimeoEmbed<P: Player> {
    player: P,
    video_id: VideoId,
    start_at: Duration,
    autoplay: bool,
    prefs: DisplayPrefs,
    state: EmbedState,
    observer: Observer,
    on_unplayable: Option<Box<dyn FnMut(&Error) + Send>>,
    metadata: Option<VideoInfo>,
    session: Option<P::Session>,
    disposed: Arc<AtomicBool>,
}

impl<P: Player> VimeoEmbed<P> {
    pub fn new(player: P, options: EmbedOptions) -> Result<Self, Error> {
        let video_id = VideoId::parse(&options.url)?;
        log::debug!("embedding vimeo video {}", video_id);

        Ok(Self {
            player,
            video_id,
            start_at: options.start_at,
            autoplay: options.autoplay,
            prefs: options.prefs,
            state: EmbedState::Validating,
            observer: Observer::default(),
            on_unplayable: None,
            metadata: None,
            session: None,
            disposed: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn state(&self) -> EmbedState {
        self.state
    }

    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    /// The config's metadata block, available once resolution succeeded.
    pub fn metadata(&self) -> Option<&VideoInfo> {
        self.metadata.as_ref()
    }

    pub fn session(&self) -> Option<&P::Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut P::Session> {
        self.session.as_mut()
    }

    pub fn on_progress(&mut self, f: impl FnMut(Duration) + Send + 'static) {
        self.observer.on_progress = Some(Box::new(f));
    }

    pub fn on_finish(&mut self, f: impl FnMut() + Send + 'static) {
        self.observer.on_finish = Some(Box::new(f));
    }

    /// Called exactly once if resolution ends with nothing to play, for
    /// every flavor of that: fetch failure, missing progressive list, or a
    /// list with no usable url. Hosts typically show a dialog here.
    pub fn on_unplayable(&mut self, f: impl FnMut(&Error) + Send + 'static) {
        self.on_unplayable = Some(Box::new(f));
    }

    pub fn dispose_handle(&self) -> DisposeHandle {
        DisposeHandle {
            disposed: self.disposed.clone(),
        }
    }

    /// Fetch the config, pick a stream, and spawn the playback session.
    ///
    /// One fetch per construction; calling this again, or after disposal,
    /// does nothing. Fetch errors are recovered here, not returned: the
    /// session is spawned regardless (with an empty source on failure) so
    /// the surrounding ui never waits on a session that isn't coming.
    pub async fn resolve(&mut self, client: &VimeoClient) {
        if self.state != EmbedState::Validating || self.disposed.load(Ordering::SeqCst) {
            return;
        }
        self.state = EmbedState::Fetching;

        let (config, fetch_err) = match client.fetch_config(&self.video_id).await {
            Ok(config) => (Some(config), None),
            Err(err) => {
                log::warn!("cannot resolve config for video {}: {:?}", self.video_id, err);
                (None, Some(err))
            }
        };

        // the owner may have torn us down while the fetch was in flight
        if self.disposed.load(Ordering::SeqCst) {
            return;
        }

        let url = config
            .as_ref()
            .and_then(|config| data::select_stream_url(config))
            .map(str::to_string);
        self.metadata = config.and_then(|config| config.video);

        self.state = match fetch_err {
            Some(..) => EmbedState::Failed,
            None => EmbedState::Resolved,
        };

        let source = Source {
            url: url.clone(),
            autoplay: self.autoplay,
            start_at: self.start_at,
        };
        let mut session = self.player.spawn(source, &self.prefs);
        session.subscribe(std::mem::take(&mut self.observer));
        self.session = Some(session);

        if url.is_none() {
            let err = match fetch_err {
                Some(err) => Error::ConfigFetch(err),
                None => Error::NoPlayableStream,
            };
            if let Some(alert) = self.on_unplayable.as_mut() {
                alert(&err);
            }
        }
    }

    /// Tear down the embed. Safe to call any number of times.
    pub fn dispose(&mut self) {
        self.disposed.store(true, Ordering::SeqCst);
        if let Some(mut session) = self.session.take() {
            session.stop();
        }
        self.observer = Observer::default();
        self.on_unplayable = None;
    }
}

impl<P: Player> Drop for VimeoEmbed<P> {
    fn drop(&mut self) {
        self.dispose()
    }
}
