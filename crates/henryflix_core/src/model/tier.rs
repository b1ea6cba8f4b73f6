//! Subscription plans and content categories.
//!
//! Both enums share the same two wire values, `regular` and `premium`.
//! Parsing is exact: no trimming and no case folding.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Wire value for the regular tier.
pub const TIER_REGULAR: &str = "regular";
/// Wire value for the premium tier.
pub const TIER_PREMIUM: &str = "premium";

const SUPPORTED_CATEGORY_STRINGS: &[&str] = &[TIER_REGULAR, TIER_PREMIUM];

/// Returns the category values accepted by `add_serie` and `list_series`.
pub fn supported_category_strings() -> &'static [&'static str] {
    SUPPORTED_CATEGORY_STRINGS
}

/// Subscription tier of a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    /// Default plan. Only regular content is playable.
    #[default]
    Regular,
    /// Unlocks premium content.
    Premium,
}

impl Plan {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regular => TIER_REGULAR,
            Self::Premium => TIER_PREMIUM,
        }
    }

    /// Parses an exact wire value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            TIER_REGULAR => Some(Self::Regular),
            TIER_PREMIUM => Some(Self::Premium),
            _ => None,
        }
    }

    /// Returns the opposite plan.
    pub fn toggled(self) -> Self {
        match self {
            Self::Regular => Self::Premium,
            Self::Premium => Self::Regular,
        }
    }
}

impl Display for Plan {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a series, gating which plans may play it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Regular,
    Premium,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regular => TIER_REGULAR,
            Self::Premium => TIER_PREMIUM,
        }
    }

    /// Parses an exact wire value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            TIER_REGULAR => Some(Self::Regular),
            TIER_PREMIUM => Some(Self::Premium),
            _ => None,
        }
    }

    /// Premium content requires a premium plan; regular content is open to all.
    pub fn is_available_for(self, plan: Plan) -> bool {
        match self {
            Self::Regular => true,
            Self::Premium => plan == Plan::Premium,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{supported_category_strings, Category, Plan};

    #[test]
    fn parse_is_exact_match() {
        assert_eq!(Plan::parse("premium"), Some(Plan::Premium));
        assert_eq!(Plan::parse("Premium"), None);
        assert_eq!(Category::parse(" regular"), None);
        assert_eq!(Category::parse("regular"), Some(Category::Regular));
    }

    #[test]
    fn toggled_twice_is_identity() {
        for plan in [Plan::Regular, Plan::Premium] {
            assert_ne!(plan.toggled(), plan);
            assert_eq!(plan.toggled().toggled(), plan);
        }
    }

    #[test]
    fn premium_content_requires_premium_plan() {
        assert!(Category::Regular.is_available_for(Plan::Regular));
        assert!(Category::Regular.is_available_for(Plan::Premium));
        assert!(!Category::Premium.is_available_for(Plan::Regular));
        assert!(Category::Premium.is_available_for(Plan::Premium));
    }

    #[test]
    fn supported_categories_round_trip_through_parse() {
        for value in supported_category_strings() {
            let category = Category::parse(value).expect("supported value should parse");
            assert_eq!(category.as_str(), *value);
        }
    }
}
