use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToastError {
    #[error("Invalid color {0:?}. Use #RRGGBB or a color name")]
    InvalidColor(String),
}
