use crate::error::Result;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::employee::{Employee, NewEmployee};
use chrono::{DateTime, NaiveDate, SubsecRound, Utc};

pub mod memory;
pub mod mysql;

pub use memory::MemoryStore;
pub use mysql::MySqlStore;

/// The single logical store behind both the directory and the ledger.
///
/// Every operation is one atomic unit in either backend: the in-memory store
/// holds one lock over both collections, MySQL runs each call in one transaction.
pub enum Store {
    Memory(MemoryStore),
    MySql(MySqlStore),
}

/// Whole seconds, so a timestamp reads back the same from a DATETIME column.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

impl Store {
    pub fn in_memory() -> Self {
        Store::Memory(MemoryStore::new())
    }

    pub fn backend(&self) -> &'static str {
        match self {
            Store::Memory(_) => "memory",
            Store::MySql(_) => "mysql",
        }
    }

    /// Fails with `DuplicateKey` when the id is taken.
    pub async fn insert_employee(&self, new: NewEmployee) -> Result<Employee> {
        match self {
            Store::Memory(store) => store.insert_employee(new),
            Store::MySql(store) => store.insert_employee(new).await,
        }
    }

    /// Insertion order.
    pub async fn list_employees(&self) -> Result<Vec<Employee>> {
        match self {
            Store::Memory(store) => store.list_employees(),
            Store::MySql(store) => store.list_employees().await,
        }
    }

    pub async fn get_employee(&self, employee_id: &str) -> Result<Option<Employee>> {
        match self {
            Store::Memory(store) => store.get_employee(employee_id),
            Store::MySql(store) => store.get_employee(employee_id).await,
        }
    }

    /// Removes the employee and all of its attendance in one step. Returns the
    /// number of purged attendance records, or `None` if the employee is unknown.
    pub async fn delete_employee_cascade(&self, employee_id: &str) -> Result<Option<u64>> {
        match self {
            Store::Memory(store) => store.delete_employee_cascade(employee_id),
            Store::MySql(store) => store.delete_employee_cascade(employee_id).await,
        }
    }

    /// Insert or overwrite the `(employee_id, date)` entry. `None` if the
    /// employee is unknown, in which case nothing is written.
    pub async fn upsert_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<Option<AttendanceRecord>> {
        match self {
            Store::Memory(store) => store.upsert_attendance(employee_id, date, status),
            Store::MySql(store) => store.upsert_attendance(employee_id, date, status).await,
        }
    }

    /// The employee and every one of its records, ascending by date, read from
    /// one consistent snapshot.
    pub async fn employee_attendance(
        &self,
        employee_id: &str,
    ) -> Result<Option<(Employee, Vec<AttendanceRecord>)>> {
        match self {
            Store::Memory(store) => store.employee_attendance(employee_id),
            Store::MySql(store) => store.employee_attendance(employee_id).await,
        }
    }
}
