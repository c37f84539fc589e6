use thiserror::Error;

/// Fatal failures while attaching the editor to its drawing surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
	#[error("no canvas provided")]
	MissingCanvas,
	#[error("canvas has no 2d context")]
	MissingContext,
}
