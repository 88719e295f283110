use thiserror::Error as ThisError;

///
/// ChangeError
///
/// Failures raised while decoding change records from text.
/// In-memory changes are always well formed; these only surface when an
/// operation name arrives from outside (deserialization, parsing).
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ChangeError {
    #[error("unknown change operation '{0}'")]
    UnknownOperation(String),
}
