use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmoteConflictQuery {
    /// Reaction emote the panel would switch to.
    pub emote: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EmoteConflictDto {
    pub conflict: bool,
}
