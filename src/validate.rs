use thiserror::Error;

pub const MAX_MESSAGE_CHARS: usize = 140;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name and message are required.")]
    Required,
    #[error("Message must be 140 characters or less.")]
    TooLong,
}

/// A submission that passed [`validate`] and may be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewMessage<'a> {
    pub name: &'a str,
    pub message: &'a str,
}

/// Checks a submission from either the form or the JSON API.
///
/// Missing and empty fields are treated alike. Length is counted in
/// characters, not bytes.
pub fn validate<'a>(
    name: Option<&'a str>,
    message: Option<&'a str>,
) -> Result<NewMessage<'a>, ValidationError> {
    let (Some(name), Some(message)) = (
        name.filter(|s| !s.is_empty()),
        message.filter(|s| !s.is_empty()),
    ) else {
        return Err(ValidationError::Required);
    };

    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ValidationError::TooLong);
    }

    Ok(NewMessage { name, message })
}
