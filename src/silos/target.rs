//! Target tokens clients use to pick a silo

use super::primo::PrimoVariant;
use std::fmt;
use std::str::FromStr;

/// Targets that are reserved but have no silo behind them yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedTarget {
    Eresource,
    Site,
    People,
}

impl ReservedTarget {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Eresource => "eresource",
            Self::Site => "site",
            Self::People => "people",
        }
    }
}

/// A parsed target token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    LibGuides,
    Primo(PrimoVariant),
    Unimplemented(ReservedTarget),
}

impl Target {
    /// Every target with a silo behind it
    pub const IMPLEMENTED: [Target; 5] = [
        Target::LibGuides,
        Target::Primo(PrimoVariant::Articles),
        Target::Primo(PrimoVariant::Books),
        Target::Primo(PrimoVariant::ShareOk),
        Target::Primo(PrimoVariant::Collection),
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Self::LibGuides => "libguides",
            Self::Primo(PrimoVariant::Articles) => "primo",
            Self::Primo(PrimoVariant::Books) => "primobooks",
            Self::Primo(PrimoVariant::ShareOk) => "primoshareok",
            Self::Primo(PrimoVariant::Collection) => "collection",
            Self::Unimplemented(reserved) => reserved.token(),
        }
    }
}

/// Token that names no target at all
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTarget(pub String);

impl FromStr for Target {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "libguides" => Ok(Self::LibGuides),
            "primo" => Ok(Self::Primo(PrimoVariant::Articles)),
            "primobooks" => Ok(Self::Primo(PrimoVariant::Books)),
            "primoshareok" => Ok(Self::Primo(PrimoVariant::ShareOk)),
            "collection" => Ok(Self::Primo(PrimoVariant::Collection)),
            "eresource" => Ok(Self::Unimplemented(ReservedTarget::Eresource)),
            "site" => Ok(Self::Unimplemented(ReservedTarget::Site)),
            "people" => Ok(Self::Unimplemented(ReservedTarget::People)),
            other => Err(UnknownTarget(other.to_string())),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_round_trip() {
        for target in Target::IMPLEMENTED {
            assert_eq!(target.token().parse::<Target>(), Ok(target));
        }
    }

    #[test]
    fn test_reserved_tokens() {
        assert_eq!(
            "site".parse::<Target>(),
            Ok(Target::Unimplemented(ReservedTarget::Site))
        );
        assert_eq!(
            "eresource".parse::<Target>(),
            Ok(Target::Unimplemented(ReservedTarget::Eresource))
        );
        assert_eq!(
            "people".parse::<Target>(),
            Ok(Target::Unimplemented(ReservedTarget::People))
        );
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(
            "Primo".parse::<Target>(),
            Err(UnknownTarget("Primo".to_string()))
        );
        assert!("".parse::<Target>().is_err());
    }
}
