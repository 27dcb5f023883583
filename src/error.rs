use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status. `message` carries the
    /// server-provided error text when the response envelope had one.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// A successful envelope without a `data` payload where one was expected.
    #[error("response contained no data")]
    MissingData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_server_message() {
        let err = ApiError::Api {
            status: 404,
            message: "Event not found".to_string(),
        };
        assert_eq!(err.to_string(), "Event not found");
    }
}
