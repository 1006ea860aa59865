use std::env::var;

use dotenvy::dotenv;

pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();

        Ok(Config {
            database_url: var("DATABASE_URL")
                .map_err(|_| "An error occured while getting DATABASE_URL env param")?,
            port: match var("PORT") {
                Ok(raw) => raw
                    .parse::<u16>()
                    .map_err(|_| "An error occured while parsing PORT env param")?,
                Err(_) => 8080,
            },
        })
    }
}
