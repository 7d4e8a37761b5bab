//! Keywords command implementation.

use crate::error::Result;
use crate::output::Formatter;
use careerelite_domain::{extract_keywords, Profile};

/// Execute the keywords command.
pub fn execute_keywords(profile: &Profile, formatter: &Formatter) -> Result<()> {
    let keywords = extract_keywords(profile);
    println!("{}", formatter.format_keywords(&keywords)?);
    Ok(())
}
