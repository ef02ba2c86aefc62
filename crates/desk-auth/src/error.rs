use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated, run `deskhub auth login`")]
    NotAuthenticated,

    #[error("auth response carried an empty access token")]
    EmptyToken,

    #[error("keyring error: {0}")]
    KeyringError(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),
}
