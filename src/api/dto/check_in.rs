//! DTOs for the check-in endpoint.

use serde::Serialize;

use crate::application::dto::CheckInDto;

#[derive(Debug, Serialize)]
pub struct CheckInResponse {
    pub check_in: CheckInDto,
}
