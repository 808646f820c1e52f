use crate::cli::commands::ask_confirmation;
use crate::cli::parser::{AttrAction, Commands};
use crate::config::Config;
use crate::core::attr::AttributeLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::{parse_optional_color, swatch};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Attr { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            AttrAction::List => {
                let attrs = AttributeLogic::list(&mut pool)?;
                if attrs.is_empty() {
                    info("No attributes defined.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::new("ID", 5),
                    Column::new("NAME", 24),
                    Column::new("COLOR", 8),
                    Column::new("ENTRIES", 7),
                ]);
                for (a, used) in &attrs {
                    table.add_row(vec![
                        a.id.to_string(),
                        a.name.clone(),
                        a.color.clone(),
                        used.to_string(),
                    ]);
                }
                print!("{}", table.render());
            }

            AttrAction::Add { name, color } => {
                let color = parse_optional_color(color.as_ref())?;
                let id = AttributeLogic::add(&mut pool, cfg, name, color)?;
                success(format!("Attribute #{} '{}' added.", id, name.trim()));
            }

            AttrAction::Edit { id, name, color } => {
                let color = parse_optional_color(color.as_ref())?;
                let a = AttributeLogic::edit(&mut pool, *id, name.clone(), color)?;
                success(format!(
                    "Attribute #{} is now {} {} {}.",
                    a.id,
                    swatch(&a.color),
                    a.name,
                    a.color
                ));
            }

            AttrAction::Del { id, force } => {
                if !*force
                    && !ask_confirmation(&format!(
                        "Delete attribute #{}? It will be removed from every entry.",
                        id
                    ))?
                {
                    info("Operation cancelled.");
                    return Ok(());
                }

                let a = AttributeLogic::delete(&mut pool, *id)?;
                success(format!("Attribute #{} '{}' has been deleted.", a.id, a.name));
            }
        }
    }
    Ok(())
}
