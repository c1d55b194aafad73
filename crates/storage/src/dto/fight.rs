use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use super::common::validate_label;
use crate::repository::Filter;

/// Optional equality filters for listing fights.
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FightQuery {
    #[validate(length(min = 1, max = 100), custom(function = "validate_label"))]
    pub fighter1: Option<String>,

    #[validate(length(min = 1, max = 100), custom(function = "validate_label"))]
    pub fighter2: Option<String>,

    #[validate(length(min = 1, max = 50), custom(function = "validate_label"))]
    pub weight_class: Option<String>,

    pub fight_year: Option<i32>,
}

impl FightQuery {
    pub fn to_filter(&self) -> Filter {
        let mut filter = Filter::new();

        if let Some(fighter1) = &self.fighter1 {
            filter = filter.eq("fighter1", fighter1);
        }
        if let Some(fighter2) = &self.fighter2 {
            filter = filter.eq("fighter2", fighter2);
        }
        if let Some(weight_class) = &self.weight_class {
            filter = filter.eq("weight_class", weight_class);
        }
        if let Some(fight_year) = self.fight_year {
            filter = filter.eq("fight_year", fight_year);
        }

        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_empty_filter() {
        assert_eq!(FightQuery::default().to_filter(), Filter::new());
    }

    #[test]
    fn test_query_sets_given_fields() {
        let query = FightQuery {
            fighter1: Some("Islam Makhachev".to_string()),
            fight_year: Some(2024),
            ..Default::default()
        };

        assert_eq!(
            query.to_filter(),
            Filter::new()
                .eq("fighter1", "Islam Makhachev")
                .eq("fight_year", 2024)
        );
    }

    #[test]
    fn test_blank_names_are_rejected() {
        let query = FightQuery {
            fighter2: Some(String::new()),
            ..Default::default()
        };

        assert!(query.validate().is_err());
    }
}
