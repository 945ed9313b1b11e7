use crate::error::SquadforgeError;

/// A named configuration section that can sanity-check its own values.
pub trait ConfigSection {
    fn section_name() -> &'static str;

    fn validate(&self) -> Result<(), SquadforgeError>;
}
