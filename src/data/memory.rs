use crate::{
    data::{
        StudentStore,
        student::{Student, StudentDetails},
    },
    error::{RosterError, RosterResult},
};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    All,
    ById,
    FirstName,
    LastName,
    FirstAndLastName,
}

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<Student>,
    next_id: i64,
    lookups: Vec<Lookup>,
    inserts: usize,
}

/// Keeps rows in a `Vec` and remembers every lookup, so tests can check which query ran.
#[derive(Debug, Default)]
pub struct MemoryStudentStore {
    inner: Mutex<Inner>,
    failing: bool,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: impl IntoIterator<Item = Student>) -> Self {
        let rows: Vec<_> = rows.into_iter().collect();
        let next_id = rows.iter().map(|s| s.id).max().unwrap_or(0);

        Self {
            inner: Mutex::new(Inner {
                rows,
                next_id,
                ..Inner::default()
            }),
            failing: false,
        }
    }

    /// Every call fails like a lost connection would.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn lookups(&self) -> Vec<Lookup> {
        self.inner.lock().unwrap().lookups.clone()
    }

    pub fn inserts(&self) -> usize {
        self.inner.lock().unwrap().inserts
    }

    pub fn rows(&self) -> Vec<Student> {
        self.inner.lock().unwrap().rows.clone()
    }

    fn check(&self, lookup: Option<Lookup>) -> RosterResult<MutexGuard<'_, Inner>> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(lookup) = lookup {
            inner.lookups.push(lookup);
        }
        if self.failing {
            return Err(RosterError::MakeQuery {
                source: sqlx::Error::PoolTimedOut,
            });
        }
        Ok(inner)
    }

    fn filter(
        &self,
        lookup: Lookup,
        predicate: impl Fn(&StudentDetails) -> bool,
    ) -> RosterResult<Vec<Student>> {
        let inner = self.check(Some(lookup))?;
        Ok(inner
            .rows
            .iter()
            .filter(|s| predicate(&s.details))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn get_all(&self) -> RosterResult<Vec<Student>> {
        self.filter(Lookup::All, |_| true)
    }

    async fn get_from_db_by_id(&self, id: i64) -> RosterResult<Option<Student>> {
        let inner = self.check(Some(Lookup::ById))?;
        Ok(inner.rows.iter().find(|s| s.id == id).cloned())
    }

    async fn get_by_first_name(&self, first_name: &str) -> RosterResult<Vec<Student>> {
        self.filter(Lookup::FirstName, |s| s.first_name == first_name)
    }

    async fn get_by_last_name(&self, last_name: &str) -> RosterResult<Vec<Student>> {
        self.filter(Lookup::LastName, |s| s.last_name == last_name)
    }

    async fn get_by_first_and_last_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> RosterResult<Vec<Student>> {
        self.filter(Lookup::FirstAndLastName, |s| {
            s.first_name == first_name && s.last_name == last_name
        })
    }

    async fn insert_into_database(&self, to_be_added: &StudentDetails) -> RosterResult<i64> {
        let mut inner = self.check(None)?;
        inner.next_id += 1;
        inner.inserts += 1;
        let id = inner.next_id;
        inner.rows.push(to_be_added.clone().with_id(id));
        Ok(id)
    }

    async fn update_in_database(&self, id: i64, details: &StudentDetails) -> RosterResult<bool> {
        let mut inner = self.check(None)?;
        Ok(match inner.rows.iter_mut().find(|s| s.id == id) {
            Some(row) => {
                row.details = details.clone();
                true
            }
            None => false,
        })
    }

    async fn remove_from_database(&self, id: i64) -> RosterResult<bool> {
        let mut inner = self.check(None)?;
        let before = inner.rows.len();
        inner.rows.retain(|s| s.id != id);
        Ok(inner.rows.len() != before)
    }
}
