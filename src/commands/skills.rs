//! Skills command handler.

use crate::catalog::SKILLS;
use crate::error::Result;
use crate::output::print_skill_list;

/// Print every skill with its level.
pub fn skills_command() -> Result<()> {
    print_skill_list(SKILLS);
    Ok(())
}
