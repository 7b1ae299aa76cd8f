/// Everything that can go wrong between a caller's url and a playing stream.
///
/// The first three variants are caller errors and are surfaced eagerly, at
/// construction. The last two happen at resolution time and are recovered
/// into the [`on_unplayable`](crate::VimeoEmbed::on_unplayable) path instead
/// of being returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("'{0}' is not a vimeo video url")]
    InvalidUrl(String),

    #[error("cannot extract a video id from '{0}'")]
    NoVideoId(String),

    #[error("a bearer credential is required, refusing to send a blank one")]
    MissingCredential,

    #[error("cannot fetch the player config")]
    ConfigFetch(#[source] anyhow::Error),

    #[error("the config contained no playable progressive stream")]
    NoPlayableStream,
}
