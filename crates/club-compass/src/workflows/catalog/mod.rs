//! Club listings: the domain model, CSV seed loading, storage seam, and read routes.

pub mod domain;
mod memory;
mod parser;
pub mod repository;
pub mod router;

pub use domain::{Club, ClubDomain, ClubId, RecruitmentStatus, UnknownVariant};
pub use memory::InMemoryClubRepository;
pub use repository::{ClubRepository, CATALOG_FETCH_LIMIT};
pub use router::catalog_router;

use std::io::Read;
use std::path::Path;

use parser::ParseFailure;

const BUNDLED_CATALOG: &str = include_str!("../../../data/clubs.csv");

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidField {
        row: usize,
        field: &'static str,
        source: UnknownVariant,
    },
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read club catalog: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid club catalog CSV: {}", err),
            CatalogImportError::InvalidField { row, field, source } => {
                write!(f, "row {row}: invalid {field}: {source}")
            }
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::InvalidField { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ParseFailure> for CatalogImportError {
    fn from(failure: ParseFailure) -> Self {
        match failure {
            ParseFailure::Csv(err) => Self::Csv(err),
            ParseFailure::Field { row, field, source } => {
                Self::InvalidField { row, field, source }
            }
        }
    }
}

/// Loads club listings from CSV exports.
pub struct ClubCatalogImporter;

impl ClubCatalogImporter {
    /// The seed catalog shipped with the service.
    pub fn standard() -> Result<Vec<Club>, CatalogImportError> {
        Self::from_reader(BUNDLED_CATALOG.as_bytes())
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Club>, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Club>, CatalogImportError> {
        Ok(parser::parse_clubs(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "id,name,description,domain,skills,time_commitment,recruitment_status,contact,image_url,tags,member_count\n";

    #[test]
    fn standard_catalog_covers_every_domain() {
        let clubs = ClubCatalogImporter::standard().expect("bundled catalog parses");
        assert_eq!(clubs.len(), 15);
        for domain in ClubDomain::ALL {
            assert!(
                clubs.iter().any(|club| club.domain == domain),
                "no club for {domain:?}"
            );
        }

        let codecraft = &clubs[0];
        assert_eq!(codecraft.id, ClubId("club-codecraft".to_string()));
        assert_eq!(codecraft.domain, ClubDomain::Technical);
        assert_eq!(codecraft.skills.len(), 5);
        assert_eq!(codecraft.member_count, 150);
    }

    #[test]
    fn blank_id_generates_uuid_and_parses_loose_casing() {
        let csv = format!(
            "{HEADER},Chess Circle,Weekly blitz nights,technical,Strategy|Focus,2-3 hours/week,upcoming,chess@college.edu,,Chess,\n"
        );
        let clubs = ClubCatalogImporter::from_reader(Cursor::new(csv)).expect("parses");

        assert_eq!(clubs.len(), 1);
        assert!(uuid::Uuid::parse_str(clubs[0].id.as_str()).is_ok());
        assert_eq!(clubs[0].domain, ClubDomain::Technical);
        assert_eq!(clubs[0].recruitment_status, RecruitmentStatus::Upcoming);
        assert_eq!(clubs[0].member_count, 0);
        assert!(clubs[0].image_url.is_empty());
    }

    #[test]
    fn unknown_domain_names_the_row() {
        let csv = format!(
            "{HEADER}club-a,Alpha,,Technical,,,Open,,,,1\nclub-b,Beta,,Gaming,,,Open,,,,2\n"
        );
        match ClubCatalogImporter::from_reader(Cursor::new(csv)) {
            Err(CatalogImportError::InvalidField { row, field, source }) => {
                assert_eq!(row, 3);
                assert_eq!(field, "domain");
                assert_eq!(source.0, "Gaming");
            }
            other => panic!("expected invalid field error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let result = ClubCatalogImporter::from_path("/nonexistent/clubs.csv");
        assert!(matches!(result, Err(CatalogImportError::Io(_))));
    }
}
