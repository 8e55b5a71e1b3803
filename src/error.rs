use crate::viz::RendererModule;
use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart object has no chartDef.type discriminant")]
    MissingDefinition,

    #[error("unsupported chart type: {0}")]
    UnsupportedType(String),

    #[error("renderer module not registered: {0:?}")]
    ModuleNotRegistered(RendererModule),

    #[error("malformed chart payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid chart data: {0}")]
    InvalidData(String),
}
