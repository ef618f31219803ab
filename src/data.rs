use crate::{
    data::student::{Student, StudentDetails},
    error::RosterResult,
};
use async_trait::async_trait;

#[cfg(test)]
pub mod memory;
pub mod postgres;
pub mod student;

/// Storage for student rows. Every method is a single statement with no transaction around it.
#[async_trait]
pub trait StudentStore: Send + Sync {
    async fn get_all(&self) -> RosterResult<Vec<Student>>;
    async fn get_from_db_by_id(&self, id: i64) -> RosterResult<Option<Student>>;
    async fn get_by_first_name(&self, first_name: &str) -> RosterResult<Vec<Student>>;
    async fn get_by_last_name(&self, last_name: &str) -> RosterResult<Vec<Student>>;
    async fn get_by_first_and_last_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> RosterResult<Vec<Student>>;
    /// Returns the identifier the database assigned.
    async fn insert_into_database(&self, to_be_added: &StudentDetails) -> RosterResult<i64>;
    /// Replaces every column of the row. `false` means no row had that id.
    async fn update_in_database(&self, id: i64, details: &StudentDetails) -> RosterResult<bool>;
    /// `false` means no row had that id.
    async fn remove_from_database(&self, id: i64) -> RosterResult<bool>;
}
