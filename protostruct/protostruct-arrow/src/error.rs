use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrowBridgeError {
    #[error("Arrow schemas need a struct root, got '{type_name}'")]
    NotAStruct { type_name: String },
}
