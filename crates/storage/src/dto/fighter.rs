use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::common::validate_label;
use crate::models::Fighter;

/// A fighter reduced to its name, as listed by the weight-class selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FighterName {
    pub name: String,
}

impl From<Fighter> for FighterName {
    fn from(fighter: Fighter) -> Self {
        Self { name: fighter.name }
    }
}

/// Weight class label taken from the request path. Matched exactly as given.
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct WeightClassPath {
    /// Weight class label, e.g. "185"
    #[validate(
        length(
            min = 1,
            max = 50,
            message = "Weight class must be between 1 and 50 characters"
        ),
        custom(function = "validate_label")
    )]
    pub weight_class: String,
}
