pub mod error;
pub mod templates;

use crate::config::error::ConfigError;
use crate::shared::utils;
use mlua::{Lua, Table, Value};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub const CONFIG_PATH_ENV: &str = "EVENT_SCHEDULE_CONFIG_FILE_PATH";

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub source: Source,
    pub output: Output,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Source {
    pub schedule: String,
    pub authors: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Output {
    pub template: String,
    pub show_carousel: bool,
}

impl Config {
    /// Config used when no config file exists: standard template, no carousel.
    pub fn with_schedule(schedule: impl Into<String>) -> Self {
        Self {
            source: Source {
                schedule: schedule.into(),
                authors: None,
            },
            output: Output {
                template: templates::schedule::STANDARD.to_string(),
                show_carousel: false,
            },
        }
    }
}

pub fn init() -> anyhow::Result<Config> {
    let path_buf = get_config_file_path()?;
    tracing::debug!(path = %path_buf.display(), "loading config");
    load_config(&path_buf)
}

fn get_config_file_path() -> anyhow::Result<PathBuf> {
    let config_file_path = match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => path.trim().to_string(),
        Err(_) => {
            let home_dir =
                env::var("HOME").map_err(|_e| ConfigError::HomeNotSet(CONFIG_PATH_ENV))?;
            format!("{}/.config/event-schedule/config.lua", home_dir)
        }
    };

    let config_file_path_buf = utils::path::expand_tilde(&config_file_path);

    if config_file_path_buf.is_file() {
        Ok(config_file_path_buf)
    } else {
        Err(
            ConfigError::ConfigFileNotFound(utils::path::contract_tilde(
                &config_file_path_buf,
            ))
            .into(),
        )
    }
}

fn load_config(config_file_path: &Path) -> anyhow::Result<Config> {
    let lua = Lua::new();

    let config_path = config_file_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .to_string_lossy();

    lua.load(format!(
        r#"package.path = package.path .. ";{}/?.lua""#,
        config_path
    ))
    .exec()?;

    let event_schedule_mod = lua.create_table()?;
    let template_sub_mod = lua.create_table()?;

    template_sub_mod.set("standard", templates::schedule::STANDARD)?;
    event_schedule_mod.set("template", template_sub_mod)?;

    let globals = lua.globals();
    let package: Table = globals.get("package")?;
    let loaded: Table = package.get("loaded")?;

    loaded.set("event_schedule", event_schedule_mod)?;

    let config_code = fs::read_to_string(config_file_path)?;
    let config_eval = lua
        .load(&config_code)
        .eval()
        .map_err(|e| ConfigError::LuaRuntime {
            path: utils::path::contract_tilde(config_file_path),
            message: e.to_string(),
        })?;

    let Value::Table(config_tbl) = config_eval else {
        return Err(ConfigError::RequiredFieldNotFound(
            "config.lua did not return a table!".to_owned(),
            utils::path::contract_tilde(config_file_path),
        )
        .into());
    };

    let source_tbl: Table = config_tbl
        .get::<_, Option<Table>>("source")?
        .ok_or_else(|| {
            ConfigError::RequiredFieldNotFound(
                "source".to_owned(),
                utils::path::contract_tilde(config_file_path),
            )
        })?;

    let schedule: String = source_tbl
        .get::<_, Option<String>>("schedule")?
        .ok_or_else(|| {
            ConfigError::RequiredFieldNotFound(
                "source.schedule".to_owned(),
                utils::path::contract_tilde(config_file_path),
            )
        })?;
    let authors: Option<String> = source_tbl.get("authors")?;

    let output = match config_tbl.get::<_, Option<Table>>("output")? {
        Some(output_tbl) => Output {
            template: output_tbl
                .get::<_, Option<String>>("template")?
                .unwrap_or_else(|| templates::schedule::STANDARD.to_string()),
            show_carousel: output_tbl
                .get::<_, Option<bool>>("showCarousel")?
                .unwrap_or(false),
        },
        None => Output {
            template: templates::schedule::STANDARD.to_string(),
            show_carousel: false,
        },
    };

    Ok(Config {
        source: Source { schedule, authors },
        output,
    })
}
