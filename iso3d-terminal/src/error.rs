use iso3d_core::ObjError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to load mesh: {0}")]
    Obj(#[from] ObjError),
}
