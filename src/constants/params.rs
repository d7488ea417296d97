/// Path parameter carrying the user id for update and delete.
pub const PATH_PARAM_ID: &str = "id";
