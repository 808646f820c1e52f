use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            if path.exists() {
                println!("📄 {}\n", path.display());
                ConfigLogic::print(&path)?;
            } else {
                warning(format!(
                    "No configuration file at {}; defaults in use:",
                    path.display()
                ));
                println!("{}", serde_yaml::to_string(cfg)?);
            }
        }

        if *check {
            ConfigLogic::check(&path)?;
        }

        if *migrate {
            let pool = DbPool::new(&cfg.database)?;
            init_db(&pool.conn)?;
            ConfigLogic::migrate(&pool.conn, cfg)?;
        }

        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
            success(format!("Configuration file edited: {}", path.display()));
        }
    }

    Ok(())
}
