/*!
vimeo-embed. embed a vimeo-hosted video in an application screen

Resolving a url to something playable is a three step pipeline: match the
url and pull out the numeric video id, fetch the player-config document for
that id, then pick the first usable progressive-download mp4 out of it. The
result is handed to a [`Player`] implementation, which owns everything
visual (rendering, controls, fullscreen, seeking).

```no_run
use vimeo_embed::{EmbedOptions, RequestOptions, VimeoClient, VimeoEmbed};
# use vimeo_embed::{DisplayPrefs, Observer, Player, Session, Source};
# struct MyPlayer;
# struct MySession;
# impl Player for MyPlayer {
#     type Session = MySession;
#     fn spawn(&mut self, _: Source, _: &DisplayPrefs) -> MySession { MySession }
# }
# impl Session for MySession {
#     fn subscribe(&mut self, _: Observer) {}
#     fn stop(&mut self) {}
# }

# async fn run() -> Result<(), vimeo_embed::Error> {
let client = VimeoClient::new(RequestOptions::bearer("<your token>")?);

let mut embed = VimeoEmbed::new(
    MyPlayer,
    EmbedOptions::new("https://vimeo.com/76979871").autoplay(true),
)?;
embed.on_progress(|at| log::info!("at {:?}", at));
embed.on_finish(|| log::info!("done"));
embed.on_unplayable(|err| log::warn!("cannot play: {}", err));

embed.resolve(&client).await;
# Ok(())
# }
```
*/

/// Player-config fetching
mod client;

/// The config document and stream selection
mod data;

/// Orchestration and the player seam
mod embed;

mod error;

/// Url validation and id extraction
mod matcher;

pub use client::{RequestOptions, VimeoClient};
pub use data::{
    select_stream_url, Files, Owner, PlayerConfig, ProgressiveStream, RequestInfo, VideoInfo,
};
pub use embed::{
    DisplayPrefs, DisposeHandle, EmbedOptions, EmbedState, FinishFn, Observer, Player, ProgressFn,
    Session, Source, VimeoEmbed,
};
pub use error::Error;
pub use matcher::{extract_video_id, is_vimeo_url, VideoId};
