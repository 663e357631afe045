use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use janseva_types::{ComplaintId, ComplaintRecord, ComplaintStatus, Department};

use crate::Result;

const STORE_FILE: &str = "complaints.json";

/// File-backed complaint store, the collaborator that owns records once
/// a form hands them off.
///
/// Backed by a single JSON file under the data dir. First open seeds the
/// mock records the portal ships with, so listings are never empty on a
/// fresh install. Records keep insertion order; listing never reorders.
#[derive(Debug)]
pub struct ComplaintStore {
    path: PathBuf,
    records: Vec<ComplaintRecord>,
}

impl ComplaintStore {
    /// Open the store under `data_dir`, seeding it on first use.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(STORE_FILE);

        if !path.exists() {
            let store = Self {
                path,
                records: seed_records(),
            };
            store.save()?;
            return Ok(store);
        }

        let content = std::fs::read_to_string(&path)?;
        let records: Vec<ComplaintRecord> = serde_json::from_str(&content)?;
        Ok(Self { path, records })
    }

    /// All records for a department, in insertion order.
    pub fn list(&self, department: Department) -> Vec<&ComplaintRecord> {
        self.records
            .iter()
            .filter(|r| r.department == department)
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&ComplaintRecord> {
        self.records.iter().find(|r| r.id.as_str() == id)
    }

    /// Accept a newly submitted record and persist it.
    pub fn append(&mut self, record: ComplaintRecord) -> Result<()> {
        self.records.push(record);
        self.save()
    }

    /// Operator-side status mutation. Monotonicity is enforced by the
    /// record itself; nothing is written when the transition is rejected.
    pub fn advance(&mut self, id: &str, status: ComplaintStatus) -> Result<ComplaintRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id.as_str() == id)
            .ok_or_else(|| crate::Error::ComplaintNotFound(id.to_string()))?;

        let previous = record.status;
        record.advance_to(status)?;
        let updated = record.clone();

        if previous != status {
            self.save()?;
        }
        Ok(updated)
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

fn seeded(
    id: &str,
    title: &str,
    description: &str,
    department: Department,
    status: ComplaintStatus,
    y: i32,
    m: u32,
    d: u32,
) -> ComplaintRecord {
    ComplaintRecord {
        id: ComplaintId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        department,
        status,
        date: Utc
            .with_ymd_and_hms(y, m, d, 9, 0, 0)
            .single()
            .expect("valid seed date"),
        citizen_name: None,
        citizen_phone: None,
    }
}

/// Mock complaints every fresh install starts with.
fn seed_records() -> Vec<ComplaintRecord> {
    vec![
        seeded(
            "EL2024001",
            "Voltage Fluctuation",
            "Frequent voltage dips damaging appliances in Sector 18",
            Department::Electricity,
            ComplaintStatus::InProgress,
            2024,
            2,
            3,
        ),
        seeded(
            "EL2024002",
            "Street Light Issue",
            "Street lights out on the main road near the park entrance",
            Department::Electricity,
            ComplaintStatus::Resolved,
            2024,
            1,
            25,
        ),
        seeded(
            "GS2024001",
            "Cylinder Delivery Delay",
            "Booked cylinder on Jan 30, still not delivered",
            Department::Gas,
            ComplaintStatus::Submitted,
            2024,
            2,
            5,
        ),
        seeded(
            "MC2024001",
            "Garbage not collected",
            "No garbage pickup for 3 days in Block C, Ward 5",
            Department::Municipal,
            ComplaintStatus::InProgress,
            2024,
            2,
            4,
        ),
        seeded(
            "MC2024002",
            "Water pipeline leak",
            "Major water leakage near main road junction causing wastage",
            Department::Municipal,
            ComplaintStatus::Submitted,
            2024,
            2,
            1,
        ),
        seeded(
            "MC2024003",
            "Street light repair",
            "Multiple street lights not working in residential area",
            Department::Municipal,
            ComplaintStatus::Resolved,
            2024,
            1,
            28,
        ),
    ]
}
