use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use sqlx::postgres::{
  PgConnectOptions,
  PgPoolOptions,
  PgSslMode
};
use sqlx::sqlite::{
  SqliteConnectOptions,
  SqlitePoolOptions
};

use crate::config::{
  ConfigError,
  ServerConfig,
  SqlDialect
};
use crate::repo::{
  CustomerRepo,
  PostgresCustomerRepo,
  SqliteCustomerRepo
};

/// Builds the process-wide pool for the
/// configured dialect and wraps it in a
/// repository.
///
/// The pool connects lazily, so an
/// unreachable database shows up as
/// failed queries rather than a startup
/// error.
pub fn connect(
  config: &ServerConfig,
  config_path: &Path
) -> Result<Arc<dyn CustomerRepo>, ConfigError>
{
  match config.dialect()? {
    | SqlDialect::Sqlite => {
      let base_dir = config_path
        .parent()
        .ok_or_else(|| {
          ConfigError::Invalid(
            "config path has no parent"
              .into()
          )
        })?;

      let path =
        config.sqlite_path(base_dir);

      tracing::info!(
        path = %path.display(),
        "using sqlite database"
      );

      let options =
        SqliteConnectOptions::new()
          .filename(&path)
          .create_if_missing(true);

      let pool = SqlitePoolOptions::new()
        .connect_lazy_with(options);

      Ok(Arc::new(
        SqliteCustomerRepo::new(pool)
      ))
    }
    | SqlDialect::Postgres => {
      let options =
        postgres_options(config)?;

      let pool = PgPoolOptions::new()
        .connect_lazy_with(options);

      Ok(Arc::new(
        PostgresCustomerRepo::new(pool)
      ))
    }
  }
}

fn postgres_options(
  config: &ServerConfig
) -> Result<PgConnectOptions, ConfigError>
{
  let pg = config.postgres()?;

  let ssl_mode =
    PgSslMode::from_str(&pg.ssl_mode)
      .map_err(|e| {
        ConfigError::Invalid(format!(
          "invalid postgres.ssl_mode \
           '{}': {e}",
          pg.ssl_mode
        ))
      })?;

  tracing::info!(
    host = %pg.host,
    port = pg.port,
    database = %pg.database,
    user = %pg.user,
    "using postgres database"
  );

  Ok(
    PgConnectOptions::new()
      .host(&pg.host)
      .port(pg.port)
      .database(&pg.database)
      .username(&pg.user)
      .password(&pg.password)
      .ssl_mode(ssl_mode)
  )
}
