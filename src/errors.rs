use thiserror::Error;

/// Error type for graphforge operations.
#[derive(Debug, Error)]
pub enum GraphForgeError {
    #[error("invalid node: {0}")]
    InvalidNode(String),
    #[error("property not found: {0}")]
    PropertyNotFound(String),
    #[error("empty properties: {0}")]
    EmptyProperties(String),
    #[error("malformed graph: {0}")]
    MalformedGraph(String),
    #[error("dangling reference: {0}")]
    DanglingReference(String),
    #[error("empty graph: {0}")]
    EmptyGraph(String),
    #[error("store error: {0}")]
    Store(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl GraphForgeError {
    pub fn invalid_node<T: Into<String>>(msg: T) -> Self {
        GraphForgeError::InvalidNode(msg.into())
    }

    pub fn property_not_found<T: Into<String>>(key: T) -> Self {
        GraphForgeError::PropertyNotFound(key.into())
    }

    pub fn empty_properties<T: Into<String>>(msg: T) -> Self {
        GraphForgeError::EmptyProperties(msg.into())
    }

    pub fn malformed_graph<T: Into<String>>(msg: T) -> Self {
        GraphForgeError::MalformedGraph(msg.into())
    }

    pub fn dangling_reference<T: Into<String>>(id: T) -> Self {
        GraphForgeError::DanglingReference(id.into())
    }

    pub fn empty_graph<T: Into<String>>(msg: T) -> Self {
        GraphForgeError::EmptyGraph(msg.into())
    }

    pub fn store<T: Into<String>>(msg: T) -> Self {
        GraphForgeError::Store(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        GraphForgeError::InvalidInput(msg.into())
    }
}
