use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// One person on the roster. The email is the key the backend deletes by.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(from = "ListedRecord")]
pub struct MonitorRecord {
    #[serde(rename = "nome")]
    pub name: String,

    pub email: String,

    #[serde(rename = "habilidade")]
    pub skill: String,

    #[serde(rename = "dia")]
    pub day: String,

    #[serde(rename = "hora")]
    pub hour: String,
}

/// A record as the list endpoint sends it. Some backends only fill in
/// `disponibilidade`, others only `dia` and `hora`.
#[derive(Deserialize, Default)]
#[serde(default)]
struct ListedRecord {
    nome: String,
    email: String,
    habilidade: String,
    dia: String,
    hora: String,
    disponibilidade: Option<String>,
}

impl From<ListedRecord> for MonitorRecord {
    fn from(listed: ListedRecord) -> Self {
        let mut record = MonitorRecord {
            name: listed.nome,
            email: listed.email,
            skill: listed.habilidade,
            day: listed.dia,
            hour: listed.hora,
        };

        if let Some(availability) = listed.disponibilidade {
            let (day, hour) = split_availability(&availability);
            if record.day.is_empty() {
                record.day = day.to_owned();
            }
            if record.hour.is_empty() {
                record.hour = hour.to_owned();
            }
        }

        record
    }
}

/// Inverse of [`MonitorRecord::availability`]: day up to the first
/// whitespace, hour after it.
fn split_availability(availability: &str) -> (&str, &str) {
    let availability = availability.trim();
    match availability.split_once(char::is_whitespace) {
        Some((day, hour)) => (day, hour.trim_start()),
        None => (availability, ""),
    }
}

/// The editable fields of a record, in table column order.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Skill,
    Day,
    Hour,
}

impl MonitorRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Skill => &self.skill,
            Field::Day => &self.day,
            Field::Hour => &self.hour,
        }
    }

    /// The backend stores day and hour as a single "disponibilidade" value.
    pub fn availability(&self) -> String {
        format!("{} {}", self.day, self.hour).trim().to_owned()
    }

    /// Form body of the create call.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("nome", self.name.clone()),
            ("email", self.email.clone()),
            ("habilidade", self.skill.clone()),
            ("disponibilidade", self.availability()),
            ("dia", self.day.clone()),
            ("hora", self.hour.clone()),
        ]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ListResponse {
    pub monitores: Vec<MonitorRecord>,
}
