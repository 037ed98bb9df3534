use super::domain::{Club, ClubDomain, ClubId, RecruitmentStatus, UnknownVariant};
use serde::{Deserialize, Deserializer};
use std::io::Read;

const LIST_SEPARATOR: char = '|';

#[derive(Debug)]
pub(crate) enum ParseFailure {
    Csv(csv::Error),
    Field {
        row: usize,
        field: &'static str,
        source: UnknownVariant,
    },
}

impl From<csv::Error> for ParseFailure {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub(crate) fn parse_clubs<R: Read>(reader: R) -> Result<Vec<Club>, ParseFailure> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut clubs = Vec::new();

    for (index, record) in csv_reader.deserialize::<ClubRow>().enumerate() {
        let row = record?;
        // Row numbers are 1-based and skip the header line.
        clubs.push(row.into_club(index + 2)?);
    }

    Ok(clubs)
}

#[derive(Debug, Deserialize)]
struct ClubRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    name: String,
    #[serde(default)]
    description: String,
    domain: String,
    #[serde(default)]
    skills: String,
    #[serde(default)]
    time_commitment: String,
    recruitment_status: String,
    #[serde(default)]
    contact: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    tags: String,
    #[serde(default)]
    member_count: Option<u32>,
}

impl ClubRow {
    fn into_club(self, row: usize) -> Result<Club, ParseFailure> {
        let domain = self
            .domain
            .parse::<ClubDomain>()
            .map_err(|source| ParseFailure::Field {
                row,
                field: "domain",
                source,
            })?;
        let recruitment_status = self
            .recruitment_status
            .parse::<RecruitmentStatus>()
            .map_err(|source| ParseFailure::Field {
                row,
                field: "recruitment_status",
                source,
            })?;

        Ok(Club {
            id: self.id.map(ClubId).unwrap_or_else(ClubId::generate),
            name: self.name,
            description: self.description,
            domain,
            skills: split_list(&self.skills),
            time_commitment: self.time_commitment,
            recruitment_status,
            contact: self.contact,
            image_url: self.image_url,
            tags: split_list(&self.tags),
            member_count: self.member_count.unwrap_or(0),
        })
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_list_columns() {
        assert_eq!(
            split_list(" Coding | Hackathons||Tech "),
            vec!["Coding", "Hackathons", "Tech"]
        );
        assert!(split_list("").is_empty());
    }
}
