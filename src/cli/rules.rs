//! Rules command implementation

use clap::Args;
use std::path::PathBuf;

use crate::rules::RuleSet;

#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Rule table JSON file
    #[arg(short, long, default_value = "rules.json")]
    pub rules: PathBuf,

    /// Fail with a non-zero exit code when the table has issues
    #[arg(long)]
    pub strict: bool,
}

impl RulesArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let set = RuleSet::load(&self.rules)?;
        let active = set.active().count();
        let issues = set.validate();

        println!("Rule table: {}", self.rules.display());
        println!("  Rules:  {}", set.len());
        println!("  Active: {active}");

        if issues.is_empty() {
            println!("  No issues found");
        } else {
            println!("  Issues: {}", issues.len());
            for issue in &issues {
                println!("    - {issue}");
            }
            if self.strict {
                anyhow::bail!("{} rule table issue(s)", issues.len());
            }
        }

        Ok(())
    }
}
