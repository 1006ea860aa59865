use chrono::NaiveDate;
use poem_openapi::Object;

/// Body shared by create and update. `dob` is a plain calendar date,
/// `"YYYY-MM-DD"`; an unparseable date is rejected before the handler runs.
#[derive(Object, Debug)]
pub struct UserPayloadDto {
    #[oai(validator(min_length = 1))]
    pub name: String,
    pub dob: NaiveDate,
}
