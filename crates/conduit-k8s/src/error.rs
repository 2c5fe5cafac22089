use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum K8sError {
    #[error("cannot find Kubernetes canonical name from friendly name [{0}]")]
    UnknownFriendlyName(String),
}

pub type K8sResult<T> = Result<T, K8sError>;
