use strum::Display;

use crate::api::{Field, MonitorRecord};
use crate::prompt::Prompt;
use crate::remote::Remote;
use crate::view::{FormInputs, RosterView, RowId};

pub const ADDED: &str = "Monitor added!";

/// Why a submission was refused. The message is what the user is shown.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[strum(to_string = "Write the monitor's name!")]
    MissingName,
    #[strum(to_string = "All fields must be filled in!")]
    MissingFields,
}

pub fn validate(inputs: &FormInputs) -> Result<MonitorRecord, Rejection> {
    if inputs.name.is_empty() {
        return Err(Rejection::MissingName);
    }

    // day and hour together are the availability
    if [Field::Email, Field::Skill, Field::Day, Field::Hour]
        .into_iter()
        .any(|field| inputs.get(field).is_empty())
    {
        return Err(Rejection::MissingFields);
    }

    Ok(inputs.to_record())
}

/// Validates the entry form, shows the new row and sends it to the backend.
///
/// A rejection is alerted and nothing is sent. The row stays in the table
/// whatever the backend later answers.
pub fn submit_new_record(
    view: &mut RosterView,
    prompt: &mut dyn Prompt,
    remote: &Remote,
) -> Result<RowId, Rejection> {
    let record = match validate(&view.inputs) {
        Ok(record) => record,
        Err(rejection) => {
            prompt.alert(&rejection.to_string());
            return Err(rejection);
        }
    };

    let id = view.append_row(&record);
    remote.create_record(record);
    prompt.alert(ADDED);
    Ok(id)
}
