//! Dialect selection by identifier.

use std::fmt;
use std::str::FromStr;

use crate::config::DialectAttributes;
use crate::dialect::{DamengDialect, DatabaseDialect, OscarDialect};
use crate::error::{Error, Result};

/// The closed set of supported products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialectKind {
    /// Dameng (DM).
    Dameng,
    /// ShenTong (Oscar).
    Oscar,
}

impl DialectKind {
    /// All supported dialects.
    pub const ALL: [DialectKind; 2] = [DialectKind::Dameng, DialectKind::Oscar];

    /// Short product name.
    pub fn name(&self) -> &'static str {
        match self {
            DialectKind::Dameng => "DM",
            DialectKind::Oscar => "OSCAR",
        }
    }

    /// Create the adapter for this dialect.
    pub fn create(&self, attributes: DialectAttributes) -> Box<dyn DatabaseDialect> {
        match self {
            DialectKind::Dameng => Box::new(DamengDialect::with_attributes(attributes)),
            DialectKind::Oscar => Box::new(OscarDialect::with_attributes(attributes)),
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DialectKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DM" | "DAMENG" => Ok(DialectKind::Dameng),
            "OSCAR" | "SHENTONG" => Ok(DialectKind::Oscar),
            _ => Err(Error::UnknownDialect {
                name: s.to_string(),
            }),
        }
    }
}

/// Look up a dialect by identifier and create its adapter.
pub fn create_dialect(id: &str, attributes: DialectAttributes) -> Result<Box<dyn DatabaseDialect>> {
    Ok(id.parse::<DialectKind>()?.create(attributes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("dm".parse::<DialectKind>().unwrap(), DialectKind::Dameng);
        assert_eq!("DAMENG".parse::<DialectKind>().unwrap(), DialectKind::Dameng);
        assert_eq!("Oscar".parse::<DialectKind>().unwrap(), DialectKind::Oscar);
        assert_eq!("shentong".parse::<DialectKind>().unwrap(), DialectKind::Oscar);
    }

    #[test]
    fn test_unknown_dialect() {
        let err = create_dialect("informix", DialectAttributes::new()).unwrap_err();
        assert_eq!(err.to_string(), "Unknown dialect: informix");
    }

    #[test]
    fn test_create_round_trips_kind() {
        for kind in DialectKind::ALL {
            let dialect = kind.create(DialectAttributes::new());
            assert_eq!(dialect.kind(), kind);
            assert_eq!(dialect.name(), kind.name());
        }
    }

    #[test]
    fn test_create_passes_attributes() {
        let attrs = DialectAttributes::new().with_strict_big_number_interpretation(true);
        let dialect = create_dialect("DM", attrs).unwrap();
        assert!(dialect.strict_big_number_interpretation());
    }
}
