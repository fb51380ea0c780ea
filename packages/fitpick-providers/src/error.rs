pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The adapter cannot run at all (missing credentials or endpoint). Kept
	/// separate from transient failures so a configuration gap is never
	/// mistaken for "no matches".
	#[error("Source unavailable: {message}")]
	Unavailable { message: String },
	#[error(transparent)]
	Reqwest(#[from] reqwest::Error),
}
