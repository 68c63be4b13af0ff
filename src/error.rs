use thiserror::Error;

pub type Result<T> = std::result::Result<T, AudioError>;

/// Errors surfaced by the segmentation engine.
///
/// Malformed input fails immediately and deterministically; nothing here is
/// retried.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The transport byte stream does not contain a whole number of
    /// 16-bit samples.
    #[error("PCM byte stream of {0} bytes is not a whole number of 16-bit samples")]
    Format(usize),
}
