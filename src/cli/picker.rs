//! Arrow-key menu front end

use crate::dispatch::{dispatch, Flow};
use crate::models::Intent;
use crate::state::CallCenter;
use crate::Result;
use colored::Colorize;
use dialoguer::Select;

/// Offer the menu as a selectable list until Quit or Esc
pub fn run(center: &mut CallCenter) -> Result<()> {
    let labels: Vec<&str> = Intent::ALL.iter().map(Intent::label).collect();

    loop {
        let selection = Select::new()
            .with_prompt("Choose an option")
            .items(&labels)
            .default(0)
            .interact_opt()?;

        let Some(idx) = selection else {
            println!("{}", "Goodbye!".green());
            return Ok(());
        };

        if dispatch(center, Intent::ALL[idx])? == Flow::Quit {
            println!("{}", "Goodbye!".green());
            return Ok(());
        }
    }
}
