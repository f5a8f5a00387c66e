use crate::{error::config::ConfigError, routers::DEFAULT_DB_ALIAS};

/// Alias used for the framework apps (`admin`, `auth`, `contenttypes`, `sessions`)
/// unless `SYSTEM_DB_ALIAS` overrides it.
pub static DEFAULT_SYSTEM_DB_ALIAS: &str = "system_db";
/// Alias used for the `inventory` app unless `INVENTORY_DB_ALIAS` overrides it.
pub static DEFAULT_INVENTORY_DB_ALIAS: &str = "inventory_db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub system_database_url: String,
    pub inventory_database_url: String,
    pub system_db_alias: String,
    pub inventory_db_alias: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable source.
    ///
    /// `DATABASE_URL` is required. The system and inventory URLs fall back to it
    /// so a single database can serve every alias.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let system_database_url =
            lookup("SYSTEM_DATABASE_URL").unwrap_or_else(|| database_url.clone());
        let inventory_database_url =
            lookup("INVENTORY_DATABASE_URL").unwrap_or_else(|| database_url.clone());

        let system_db_alias = alias(&lookup, "SYSTEM_DB_ALIAS", DEFAULT_SYSTEM_DB_ALIAS)?;
        let inventory_db_alias = alias(&lookup, "INVENTORY_DB_ALIAS", DEFAULT_INVENTORY_DB_ALIAS)?;

        if system_db_alias == inventory_db_alias {
            return Err(ConfigError::InvalidEnvValue {
                var: "INVENTORY_DB_ALIAS".to_string(),
                reason: format!("alias '{}' is already used by SYSTEM_DB_ALIAS", inventory_db_alias),
            });
        }

        Ok(Self {
            database_url,
            system_database_url,
            inventory_database_url,
            system_db_alias,
            inventory_db_alias,
        })
    }

    /// Connection URL configured for a database alias.
    pub fn database_url_for(&self, alias: &str) -> Option<&str> {
        if alias == DEFAULT_DB_ALIAS {
            Some(&self.database_url)
        } else if alias == self.system_db_alias {
            Some(&self.system_database_url)
        } else if alias == self.inventory_db_alias {
            Some(&self.inventory_database_url)
        } else {
            None
        }
    }

    /// Every configured alias paired with its URL, default first.
    pub fn databases(&self) -> Vec<(&str, &str)> {
        vec![
            (DEFAULT_DB_ALIAS, self.database_url.as_str()),
            (self.system_db_alias.as_str(), self.system_database_url.as_str()),
            (self.inventory_db_alias.as_str(), self.inventory_database_url.as_str()),
        ]
    }
}

fn alias<F>(lookup: &F, var: &str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(var).unwrap_or_else(|| default.to_string());

    if value.trim().is_empty() {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "alias must not be empty".to_string(),
        });
    }
    if value == DEFAULT_DB_ALIAS {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("'{}' is reserved for DATABASE_URL", DEFAULT_DB_ALIAS),
        });
    }

    Ok(value)
}
