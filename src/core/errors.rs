use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid color literal {0:?}: expected #RRGGBB")]
    InvalidColor(String),

    #[error("unknown tool {0:?}")]
    UnknownTool(String),

    #[error("raster surface failure: {0}")]
    Surface(String),
}
