use crate::{
    data::{
        StudentStore,
        student::{Student, StudentDetails},
    },
    error::{
        DuplicateStudentSnafu, InvalidFieldSnafu, InvalidQueryParamsSnafu, MissingStudentSnafu,
        NoMatchingRowsSnafu, RosterResult,
    },
    service::{duplicate::is_duplicate, validation::first_invalid_field},
};
use snafu::{OptionExt, ensure};
use std::sync::Arc;

pub mod duplicate;
pub mod validation;

/// Which name lookup a search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameFilter<'a> {
    FirstAndLast { first_name: &'a str, last_name: &'a str },
    First(&'a str),
    Last(&'a str),
}

impl<'a> NameFilter<'a> {
    /// `None` when both names are empty.
    pub const fn from_query(first_name: &'a str, last_name: &'a str) -> Option<Self> {
        match (first_name.is_empty(), last_name.is_empty()) {
            (false, false) => Some(Self::FirstAndLast {
                first_name,
                last_name,
            }),
            (false, true) => Some(Self::First(first_name)),
            (true, false) => Some(Self::Last(last_name)),
            (true, true) => None,
        }
    }
}

#[derive(Clone)]
pub struct StudentService {
    store: Arc<dyn StudentStore>,
}

impl StudentService {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    fn validate(details: &StudentDetails) -> RosterResult<()> {
        match first_invalid_field(details) {
            Some(field) => InvalidFieldSnafu { field }.fail(),
            None => Ok(()),
        }
    }

    pub async fn create(&self, details: StudentDetails) -> RosterResult<Student> {
        Self::validate(&details)?;

        let existing = self.store.get_all().await?;
        ensure!(!is_duplicate(&details, &existing), DuplicateStudentSnafu);

        let id = self.store.insert_into_database(&details).await?;
        info!(id, "Created student");

        Ok(details.with_id(id))
    }

    /// Lookup failures and empty results both come back as `NoMatchingRows`.
    pub async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> RosterResult<Vec<Student>> {
        let filter =
            NameFilter::from_query(first_name, last_name).context(InvalidQueryParamsSnafu)?;

        let result = match filter {
            NameFilter::FirstAndLast {
                first_name,
                last_name,
            } => {
                self.store
                    .get_by_first_and_last_name(first_name, last_name)
                    .await
            }
            NameFilter::First(first_name) => self.store.get_by_first_name(first_name).await,
            NameFilter::Last(last_name) => self.store.get_by_last_name(last_name).await,
        };

        match result {
            Ok(students) if !students.is_empty() => Ok(students),
            Ok(_) => NoMatchingRowsSnafu.fail(),
            Err(e) => {
                warn!(?e, ?filter, "Name lookup failed");
                NoMatchingRowsSnafu.fail()
            }
        }
    }

    pub async fn get_by_id(&self, id: i64) -> RosterResult<Student> {
        self.store
            .get_from_db_by_id(id)
            .await?
            .context(MissingStudentSnafu { id })
    }

    /// Replaces every field of an existing row. An update that would make the row identical to
    /// a different row is refused.
    pub async fn update(&self, id: i64, details: StudentDetails) -> RosterResult<Student> {
        Self::validate(&details)?;
        self.get_by_id(id).await?;

        let existing = self.store.get_all().await?;
        let others = existing.iter().filter(|student| student.id != id);
        ensure!(!is_duplicate(&details, others), DuplicateStudentSnafu);

        let updated = self.store.update_in_database(id, &details).await?;
        ensure!(updated, MissingStudentSnafu { id });
        info!(id, "Updated student");

        Ok(details.with_id(id))
    }

    pub async fn delete(&self, id: i64) -> RosterResult<()> {
        self.get_by_id(id).await?;

        let removed = self.store.remove_from_database(id).await?;
        ensure!(removed, MissingStudentSnafu { id });
        info!(id, "Deleted student");

        Ok(())
    }
}
