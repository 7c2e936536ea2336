use std::env::{self, VarError};
use std::fmt::Debug;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read env var {key}: {source:?}")]
    FailedToRead { key: &'static str, source: VarError },

    #[error("Failed to parse value {value} for env var {key}")]
    FailedToParse { key: &'static str, value: String },
}

#[derive(Clone, Copy)]
pub struct EnvVarSpec {
    pub key: &'static str,
    pub sensitive: bool,
}

#[derive(Clone)]
pub struct EnvVarValue<TVal> {
    pub spec: &'static EnvVarSpec,
    pub value: TVal,
}

impl EnvVarSpec {
    fn parse<TVal: FromStr>(&'static self, raw_value: String) -> Result<TVal, Error> {
        raw_value.parse().map_err(|_e| Error::FailedToParse {
            key: self.key,
            // sensitive values must not leak through error messages
            value: if self.sensitive { "***".to_owned() } else { raw_value },
        })
    }

    pub fn default<TVal: FromStr>(&'static self, default: TVal) -> Result<EnvVarValue<TVal>, Error> {
        let as_optional = self.optional()?;
        Ok(EnvVarValue {
            spec: as_optional.spec,
            value: as_optional.value.unwrap_or(default),
        })
    }

    pub fn optional<TVal: FromStr>(&'static self) -> Result<EnvVarValue<Option<TVal>>, Error> {
        let value = match env::var(self.key) {
            Ok(val) => Some(self.parse(val)?),
            Err(e) => {
                tracing::debug!("Failed reading env var {}: {e:?}", self.key);
                None
            }
        };
        Ok(EnvVarValue { spec: self, value })
    }

    pub fn required<TVal: FromStr>(&'static self) -> Result<EnvVarValue<TVal>, Error> {
        let raw_value = env::var(self.key).map_err(|source| Error::FailedToRead { key: self.key, source })?;
        let value = self.parse(raw_value)?;
        Ok(EnvVarValue { spec: self, value })
    }
}

impl<TVal: Debug> Debug for EnvVarValue<TVal> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.spec.sensitive {
            f.write_str("***")
        } else {
            f.write_fmt(format_args!("{:?}", self.value))
        }
    }
}

pub const LOG_FORMAT: EnvVarSpec = EnvVarSpec {
    key: "LOG_FORMAT",
    sensitive: false,
};
pub const DRY_RUN: EnvVarSpec = EnvVarSpec {
    key: "DRY_RUN",
    sensitive: false,
};
pub const EVM_CHAIN: EnvVarSpec = EnvVarSpec {
    key: "EVM_CHAIN",
    sensitive: false,
};
pub const EXECUTION_LAYER_RPC: EnvVarSpec = EnvVarSpec {
    key: "EXECUTION_LAYER_RPC",
    sensitive: true,
};
pub const PRIVATE_KEY: EnvVarSpec = EnvVarSpec {
    key: "PRIVATE_KEY",
    sensitive: true,
};
pub const ORACLE_ARTIFACTS_DIR: EnvVarSpec = EnvVarSpec {
    key: "ORACLE_ARTIFACTS_DIR",
    sensitive: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns its variable so parallel tests don't race on the process environment.
    static PARSED: EnvVarSpec = EnvVarSpec {
        key: "ORACLE_MIGRATIONS_TEST_PARSED",
        sensitive: false,
    };
    static MISSING: EnvVarSpec = EnvVarSpec {
        key: "ORACLE_MIGRATIONS_TEST_MISSING",
        sensitive: false,
    };
    static SECRET: EnvVarSpec = EnvVarSpec {
        key: "ORACLE_MIGRATIONS_TEST_SECRET",
        sensitive: true,
    };

    #[test]
    fn required_parses_value() {
        env::set_var(PARSED.key, "42");
        let value: EnvVarValue<u64> = PARSED.required().unwrap();
        assert_eq!(value.value, 42);
        assert_eq!(format!("{value:?}"), "42");
    }

    #[test]
    fn missing_values() {
        assert!(matches!(
            MISSING.required::<String>(),
            Err(Error::FailedToRead { key, .. }) if key == MISSING.key
        ));
        assert_eq!(MISSING.optional::<String>().unwrap().value, None);
        assert!(MISSING.default(true).unwrap().value);
    }

    #[test]
    fn sensitive_values_are_masked() {
        env::set_var(SECRET.key, "not-a-number");
        let value: EnvVarValue<String> = SECRET.required().unwrap();
        assert_eq!(format!("{value:?}"), "***");

        let parse_error = SECRET.required::<u64>().unwrap_err();
        assert!(!parse_error.to_string().contains("not-a-number"));
    }
}
