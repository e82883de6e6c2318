use std::io::{Read, Seek};

use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use csv::{StringRecord, Trim};
use pushkind_common::routes::empty_string_as_none;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidateEmail, ValidationErrors};

use crate::domain::researcher::{NewResearcher, UpdateResearcher};
use crate::forms::{optional_inline, sanitize_inline_text};

const NAME_MAX_LEN: u64 = 128;

#[derive(Debug, Error)]
pub enum ResearcherFormError {
    #[error("Datos del investigador no válidos: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("El nombre y el apellido no pueden estar vacíos.")]
    EmptyName,
}

/// Payload for creating or replacing a researcher.
#[derive(Debug, Deserialize, Validate)]
pub struct ResearcherForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub first_name: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub affiliation: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub country: Option<String>,
    #[serde(default)]
    pub thematic_line_id: Option<i32>,
    #[serde(default)]
    pub language_id: Option<i32>,
    #[serde(default)]
    pub is_reviewer: bool,
}

impl ResearcherForm {
    pub fn into_new_researcher(self) -> Result<NewResearcher, ResearcherFormError> {
        self.validate()?;

        let first_name = sanitize_inline_text(&self.first_name);
        let last_name = sanitize_inline_text(&self.last_name);
        if first_name.is_empty() || last_name.is_empty() {
            return Err(ResearcherFormError::EmptyName);
        }

        Ok(NewResearcher {
            first_name,
            last_name,
            email: self.email.trim().to_lowercase(),
            affiliation: optional_inline(self.affiliation.as_deref()),
            country: optional_inline(self.country.as_deref()),
            thematic_line_id: self.thematic_line_id,
            language_id: self.language_id,
            is_reviewer: self.is_reviewer,
        })
    }

    pub fn into_update(self) -> Result<UpdateResearcher, ResearcherFormError> {
        self.into_new_researcher().map(UpdateResearcher::from)
    }
}

#[derive(MultipartForm)]
/// Multipart form carrying a CSV file of researchers.
pub struct UploadResearchersForm {
    #[multipart(limit = "10MB")]
    pub csv: TempFile,
}

#[derive(Debug, Error)]
/// Errors raised while importing researchers from CSV.
pub enum UploadResearchersFormError {
    #[error("No se pudo leer el archivo CSV.")]
    FileReadError,
    #[error("El archivo CSV no es válido: {0}")]
    CsvParseError(String),
    #[error("Faltan columnas obligatorias: first_name, last_name, email.")]
    MissingHeaders,
    #[error("Fila {row}: falta el campo `{field}`.")]
    MissingField { row: usize, field: &'static str },
    #[error("Fila {row}: el correo `{email}` no es válido.")]
    InvalidEmail { row: usize, email: String },
    #[error("El archivo CSV no contiene investigadores.")]
    EmptyUpload,
}

impl From<std::io::Error> for UploadResearchersFormError {
    fn from(_: std::io::Error) -> Self {
        UploadResearchersFormError::FileReadError
    }
}

impl From<csv::Error> for UploadResearchersFormError {
    fn from(err: csv::Error) -> Self {
        UploadResearchersFormError::CsvParseError(err.to_string())
    }
}

impl UploadResearchersForm {
    /// Parse the uploaded CSV. Any invalid row rejects the whole file.
    pub fn parse(&mut self) -> Result<Vec<NewResearcher>, UploadResearchersFormError> {
        self.csv.file.rewind()?;
        parse_researchers(self.csv.file.by_ref())
    }
}

struct HeaderIndexes {
    first_name: usize,
    last_name: usize,
    email: usize,
    affiliation: Option<usize>,
    country: Option<usize>,
}

fn locate_header(headers: &StringRecord, expected: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(expected))
}

fn locate_headers(headers: &StringRecord) -> Result<HeaderIndexes, UploadResearchersFormError> {
    let required = |name| {
        locate_header(headers, name).ok_or(UploadResearchersFormError::MissingHeaders)
    };

    Ok(HeaderIndexes {
        first_name: required("first_name")?,
        last_name: required("last_name")?,
        email: required("email")?,
        affiliation: locate_header(headers, "affiliation"),
        country: locate_header(headers, "country"),
    })
}

pub(crate) fn parse_researchers<R: Read>(
    reader: R,
) -> Result<Vec<NewResearcher>, UploadResearchersFormError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let indexes = locate_headers(&headers)?;

    let mut researchers = Vec::new();

    for (index, row) in csv_reader.records().enumerate() {
        let row_number = index + 2; // header is row 1
        let record = row?;

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let required = |position: usize, field: &'static str| {
            let value = sanitize_inline_text(record.get(position).unwrap_or_default());
            if value.is_empty() {
                Err(UploadResearchersFormError::MissingField {
                    row: row_number,
                    field,
                })
            } else {
                Ok(value)
            }
        };

        let first_name = required(indexes.first_name, "first_name")?;
        let last_name = required(indexes.last_name, "last_name")?;
        let email = required(indexes.email, "email")?.to_lowercase();

        if !email.validate_email() {
            return Err(UploadResearchersFormError::InvalidEmail {
                row: row_number,
                email,
            });
        }

        let optional = |position: Option<usize>| optional_inline(position.and_then(|idx| record.get(idx)));

        researchers.push(NewResearcher {
            first_name,
            last_name,
            email,
            affiliation: optional(indexes.affiliation),
            country: optional(indexes.country),
            thematic_line_id: None,
            language_id: None,
            is_reviewer: false,
        });
    }

    if researchers.is_empty() {
        return Err(UploadResearchersFormError::EmptyUpload);
    }

    Ok(researchers)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Seek, SeekFrom, Write};

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn form_normalizes_fields() {
        let form = ResearcherForm {
            first_name: " María ".into(),
            last_name: "  López  Ruiz".into(),
            email: "Maria.Lopez@Uni.EDU".into(),
            affiliation: Some("  ".into()),
            country: Some(" Perú ".into()),
            thematic_line_id: Some(2),
            language_id: None,
            is_reviewer: true,
        };

        let researcher = form.into_new_researcher().expect("valid form");
        assert_eq!(researcher.first_name, "María");
        assert_eq!(researcher.last_name, "López Ruiz");
        assert_eq!(researcher.email, "maria.lopez@uni.edu");
        assert_eq!(researcher.affiliation, None);
        assert_eq!(researcher.country.as_deref(), Some("Perú"));
        assert!(researcher.is_reviewer);
    }

    #[test]
    fn parses_rows_with_optional_columns() {
        let csv = "First_Name,last_name,email,country\n\
                   Ana,Gómez,ana@uni.edu,Chile\n\
                   ,,,\n\
                   Luis,Mora,LUIS@uni.edu,\n";

        let researchers = parse_researchers(Cursor::new(csv)).expect("should parse");

        assert_eq!(researchers.len(), 2);
        assert_eq!(researchers[0].country.as_deref(), Some("Chile"));
        assert_eq!(researchers[0].affiliation, None);
        assert_eq!(researchers[1].email, "luis@uni.edu");
        assert_eq!(researchers[1].country, None);
    }

    #[test]
    fn missing_headers_are_reported() {
        let csv = "first_name,email\nAna,ana@uni.edu\n";

        assert!(matches!(
            parse_researchers(Cursor::new(csv)),
            Err(UploadResearchersFormError::MissingHeaders)
        ));
    }

    #[test]
    fn bad_row_aborts_with_row_number() {
        let csv = "first_name,last_name,email\n\
                   Ana,Gómez,ana@uni.edu\n\
                   Luis,,luis@uni.edu\n";

        match parse_researchers(Cursor::new(csv)) {
            Err(UploadResearchersFormError::MissingField { row, field }) => {
                assert_eq!(row, 3);
                assert_eq!(field, "last_name");
            }
            other => panic!("expected missing field, got {other:?}"),
        }
    }

    #[test]
    fn invalid_email_is_rejected() {
        let csv = "first_name,last_name,email\nAna,Gómez,no-es-correo\n";

        assert!(matches!(
            parse_researchers(Cursor::new(csv)),
            Err(UploadResearchersFormError::InvalidEmail { row: 2, .. })
        ));
    }

    #[test]
    fn header_only_file_is_empty_upload() {
        let csv = "first_name,last_name,email\n";

        assert!(matches!(
            parse_researchers(Cursor::new(csv)),
            Err(UploadResearchersFormError::EmptyUpload)
        ));
    }

    #[test]
    fn multipart_form_reads_temp_file() {
        let csv = "first_name,last_name,email\nAna,Gómez,ana@uni.edu\n";
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(csv.as_bytes()).expect("write csv file");
        file.as_file_mut()
            .seek(SeekFrom::Start(0))
            .expect("seek to start");

        let mut form = UploadResearchersForm {
            csv: TempFile {
                file,
                content_type: None,
                file_name: Some("investigadores.csv".to_string()),
                size: csv.len(),
            },
        };

        let researchers = form.parse().expect("should parse");
        assert_eq!(researchers.len(), 1);
        assert_eq!(researchers[0].last_name, "Gómez");
    }
}
