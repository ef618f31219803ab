use crate::{
    data::{
        StudentStore,
        student::{Student, StudentDetails},
    },
    error::{MakeQuerySnafu, RosterResult},
};
use async_trait::async_trait;
use snafu::ResultExt;
use sqlx::{Pool, Postgres, Row, postgres::PgArguments, query::Query};

const SELECT_STUDENTS: &str = "SELECT id, first_name, last_name, gender, dob, mother_tongue, nationality, father_name, mother_name, contact_number, father_occupation, mother_occupation, family_income FROM public.student";

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS public.student (
    id BIGSERIAL PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL DEFAULT '',
    gender TEXT NOT NULL DEFAULT '',
    dob TEXT NOT NULL DEFAULT '',
    mother_tongue TEXT NOT NULL DEFAULT '',
    nationality TEXT NOT NULL,
    father_name TEXT NOT NULL DEFAULT '',
    mother_name TEXT NOT NULL DEFAULT '',
    contact_number BIGINT NOT NULL,
    father_occupation TEXT NOT NULL DEFAULT '',
    mother_occupation TEXT NOT NULL DEFAULT '',
    family_income BIGINT NOT NULL DEFAULT 0
)";

#[derive(Clone, Debug)]
pub struct PostgresStudentStore {
    pool: Pool<Postgres>,
}

impl PostgresStudentStore {
    pub const fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Creates the `student` table when it is missing. Existing tables are left alone.
    pub async fn ensure_table(&self) -> RosterResult<()> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .context(MakeQuerySnafu)?;
        Ok(())
    }
}

//binds in column order, so `$1..=$12` line up with the INSERT/UPDATE column lists
fn bind_details<'q>(
    query: Query<'q, Postgres, PgArguments>,
    details: &'q StudentDetails,
) -> Query<'q, Postgres, PgArguments> {
    query
        .bind(&details.first_name)
        .bind(&details.last_name)
        .bind(&details.gender)
        .bind(&details.dob)
        .bind(&details.mother_tongue)
        .bind(&details.nationality)
        .bind(&details.father_name)
        .bind(&details.mother_name)
        .bind(details.contact_number)
        .bind(&details.father_occupation)
        .bind(&details.mother_occupation)
        .bind(details.family_income)
}

#[async_trait]
impl StudentStore for PostgresStudentStore {
    async fn get_all(&self) -> RosterResult<Vec<Student>> {
        let query = format!("{SELECT_STUDENTS} ORDER BY id");
        sqlx::query_as::<_, Student>(&query)
            .fetch_all(&self.pool)
            .await
            .context(MakeQuerySnafu)
    }

    async fn get_from_db_by_id(&self, id: i64) -> RosterResult<Option<Student>> {
        let query = format!("{SELECT_STUDENTS} WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context(MakeQuerySnafu)
    }

    async fn get_by_first_name(&self, first_name: &str) -> RosterResult<Vec<Student>> {
        let query = format!("{SELECT_STUDENTS} WHERE first_name = $1 ORDER BY id");
        sqlx::query_as::<_, Student>(&query)
            .bind(first_name)
            .fetch_all(&self.pool)
            .await
            .context(MakeQuerySnafu)
    }

    async fn get_by_last_name(&self, last_name: &str) -> RosterResult<Vec<Student>> {
        let query = format!("{SELECT_STUDENTS} WHERE last_name = $1 ORDER BY id");
        sqlx::query_as::<_, Student>(&query)
            .bind(last_name)
            .fetch_all(&self.pool)
            .await
            .context(MakeQuerySnafu)
    }

    async fn get_by_first_and_last_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> RosterResult<Vec<Student>> {
        let query = format!("{SELECT_STUDENTS} WHERE first_name = $1 AND last_name = $2 ORDER BY id");
        sqlx::query_as::<_, Student>(&query)
            .bind(first_name)
            .bind(last_name)
            .fetch_all(&self.pool)
            .await
            .context(MakeQuerySnafu)
    }

    async fn insert_into_database(&self, to_be_added: &StudentDetails) -> RosterResult<i64> {
        let query = bind_details(
            sqlx::query("INSERT INTO public.student (first_name, last_name, gender, dob, mother_tongue, nationality, father_name, mother_name, contact_number, father_occupation, mother_occupation, family_income) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) RETURNING id"),
            to_be_added,
        );

        let row = query.fetch_one(&self.pool).await.context(MakeQuerySnafu)?;
        row.try_get("id").context(MakeQuerySnafu)
    }

    async fn update_in_database(&self, id: i64, details: &StudentDetails) -> RosterResult<bool> {
        let query = bind_details(
            sqlx::query("UPDATE public.student SET first_name = $1, last_name = $2, gender = $3, dob = $4, mother_tongue = $5, nationality = $6, father_name = $7, mother_name = $8, contact_number = $9, father_occupation = $10, mother_occupation = $11, family_income = $12 WHERE id = $13"),
            details,
        )
        .bind(id);

        let result = query.execute(&self.pool).await.context(MakeQuerySnafu)?;
        Ok(result.rows_affected() > 0)
    }

    async fn remove_from_database(&self, id: i64) -> RosterResult<bool> {
        let result = sqlx::query("DELETE FROM public.student WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context(MakeQuerySnafu)?;
        Ok(result.rows_affected() > 0)
    }
}
