use crate::{Coordinates, Error, PositionOptions, Result};

pub fn is_supported() -> bool {
    false
}

pub fn user_agent() -> Option<String> {
    None
}

pub async fn current_position(_options: &PositionOptions) -> Result<Coordinates> {
    Err(Error::Unsupported)
}
