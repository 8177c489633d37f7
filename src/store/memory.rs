use super::now;
use crate::error::{HrError, Result};
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::employee::{Employee, NewEmployee};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Tables {
    next_seq: u64,
    /// Keyed by insertion sequence.
    employees: BTreeMap<u64, Employee>,
    /// employee_id -> insertion sequence
    index: HashMap<String, u64>,
    attendance: HashMap<String, BTreeMap<NaiveDate, AttendanceRecord>>,
}

/// Directory and ledger behind a single lock. Writers are serialized; readers
/// share the lock and never see half of a cascade.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| HrError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| HrError::Poisoned)
    }

    pub fn insert_employee(&self, new: NewEmployee) -> Result<Employee> {
        let mut tables = self.write()?;
        if tables.index.contains_key(&new.employee_id) {
            return Err(HrError::duplicate_employee(&new.employee_id));
        }

        let employee = Employee {
            employee_id: new.employee_id,
            full_name: new.full_name,
            email: new.email,
            department: new.department,
            created_at: now(),
        };

        let seq = tables.next_seq;
        tables.next_seq += 1;
        tables.index.insert(employee.employee_id.clone(), seq);
        tables.employees.insert(seq, employee.clone());
        Ok(employee)
    }

    pub fn list_employees(&self) -> Result<Vec<Employee>> {
        Ok(self.read()?.employees.values().cloned().collect())
    }

    pub fn get_employee(&self, employee_id: &str) -> Result<Option<Employee>> {
        let tables = self.read()?;
        Ok(tables
            .index
            .get(employee_id)
            .and_then(|seq| tables.employees.get(seq))
            .cloned())
    }

    pub fn delete_employee_cascade(&self, employee_id: &str) -> Result<Option<u64>> {
        let mut tables = self.write()?;
        let Some(seq) = tables.index.remove(employee_id) else {
            return Ok(None);
        };
        tables.employees.remove(&seq);
        let purged = tables
            .attendance
            .remove(employee_id)
            .map_or(0, |records| records.len() as u64);
        Ok(Some(purged))
    }

    pub fn upsert_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<Option<AttendanceRecord>> {
        let mut tables = self.write()?;
        if !tables.index.contains_key(employee_id) {
            return Ok(None);
        }

        let record = AttendanceRecord {
            employee_id: employee_id.to_string(),
            date,
            status,
            updated_at: now(),
        };
        tables
            .attendance
            .entry(employee_id.to_string())
            .or_default()
            .insert(date, record.clone());
        Ok(Some(record))
    }

    pub fn employee_attendance(
        &self,
        employee_id: &str,
    ) -> Result<Option<(Employee, Vec<AttendanceRecord>)>> {
        let tables = self.read()?;
        let Some(employee) = tables
            .index
            .get(employee_id)
            .and_then(|seq| tables.employees.get(seq))
        else {
            return Ok(None);
        };

        let records = tables
            .attendance
            .get(employee_id)
            .map(|by_date| by_date.values().cloned().collect())
            .unwrap_or_default();
        Ok(Some((employee.clone(), records)))
    }

    #[cfg(test)]
    fn orphaned_attendance(&self) -> usize {
        let tables = self.read().unwrap();
        tables
            .attendance
            .keys()
            .filter(|id| !tables.index.contains_key(*id))
            .count()
    }
}
