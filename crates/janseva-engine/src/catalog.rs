use chrono::NaiveDate;
use janseva_types::{
    BalanceSummary, Department, Notice, NoticeKind, Payment, PersonnelContact, WorkProgress,
    WorkTrack,
};

/// Static display content for one department page: issue types for the
/// complaint form plus the overview, personnel, notices, and works cards.
#[derive(Debug, Clone)]
pub struct DepartmentProfile {
    pub department: Department,
    pub tagline: &'static str,
    pub issue_types: Vec<String>,
    pub personnel: Vec<PersonnelContact>,
    pub notices: Vec<Notice>,
    pub balance: BalanceSummary,
    /// Ongoing infrastructure projects; only the municipal page has any.
    pub works: Vec<WorkProgress>,
}

impl DepartmentProfile {
    /// The two most recent notices, shown on the overview tab.
    pub fn recent_notices(&self) -> &[Notice] {
        let n = self.notices.len().min(2);
        &self.notices[..n]
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid catalog date")
}

fn contact(name: &str, role: &str, phone: &str, area: &str) -> PersonnelContact {
    PersonnelContact {
        name: name.to_string(),
        role: role.to_string(),
        phone: phone.to_string(),
        area: area.to_string(),
    }
}

fn notice(title: &str, description: &str, d: NaiveDate, kind: NoticeKind) -> Notice {
    Notice {
        title: title.to_string(),
        description: description.to_string(),
        date: d,
        kind,
    }
}

/// Look up the hard-coded profile for a department.
pub fn department_profile(department: Department) -> DepartmentProfile {
    match department {
        Department::Electricity => electricity(),
        Department::Gas => gas(),
        Department::Municipal => municipal(),
    }
}

fn electricity() -> DepartmentProfile {
    DepartmentProfile {
        department: Department::Electricity,
        tagline: "Manage your electricity services, pay bills, and file complaints",
        issue_types: [
            "Power Outage",
            "Voltage Fluctuation",
            "Meter Issue",
            "Billing Problem",
            "Street Light Issue",
            "New Connection",
            "Other",
        ]
        .map(String::from)
        .to_vec(),
        personnel: vec![
            contact("Rajesh Kumar", "Area Engineer", "9876543210", "Sector 15-20"),
            contact("Priya Singh", "Junior Engineer", "9876543211", "Sector 21-25"),
            contact("Amit Sharma", "Lineman", "9876543212", "Sector 15-25"),
        ],
        notices: vec![
            notice(
                "Scheduled Power Cut",
                "Maintenance work in Sector 17-19 on Feb 10, 10 AM - 4 PM",
                date(2024, 2, 8),
                NoticeKind::Warning,
            ),
            notice(
                "Emergency Repairs",
                "Transformer repair in Sector 21. Power restored by 6 PM today.",
                date(2024, 2, 5),
                NoticeKind::Urgent,
            ),
            notice(
                "New Online Payment Portal",
                "Pay your electricity bills online with 2% cashback. Available now!",
                date(2024, 2, 1),
                NoticeKind::Info,
            ),
        ],
        balance: BalanceSummary {
            amount: "₹1,250.00".to_string(),
            valid_until: "March 15, 2024".to_string(),
            last_payment: Some(Payment {
                amount: "₹500.00".to_string(),
                date: "Feb 1, 2024".to_string(),
            }),
        },
        works: Vec::new(),
    }
}

fn gas() -> DepartmentProfile {
    DepartmentProfile {
        department: Department::Gas,
        tagline: "Book cylinders, track deliveries, and manage your gas services",
        issue_types: [
            "Cylinder Delivery Delay",
            "Gas Leak",
            "Defective Equipment",
            "Booking Issue",
            "Refund Request",
            "New Connection",
            "Transfer Connection",
            "Other",
        ]
        .map(String::from)
        .to_vec(),
        personnel: vec![
            contact("Suresh Patel", "Area Manager", "9876543220", "Zone A"),
            contact("Neha Gupta", "Gas Safety Officer", "9876543221", "Zone A-B"),
            contact("Vikram Rao", "Delivery Coordinator", "9876543222", "All Zones"),
        ],
        notices: vec![
            notice(
                "Cylinder Delivery Delay",
                "Due to festival rush, delivery may be delayed by 2-3 days in Zone A. We apologize for inconvenience.",
                date(2024, 2, 7),
                NoticeKind::Warning,
            ),
            notice(
                "Safety Inspection Drive",
                "Free gas connection safety check in Sector 15-20 on Feb 15. Book your slot now!",
                date(2024, 2, 5),
                NoticeKind::Info,
            ),
            notice(
                "Gas Leak Alert - Zone B",
                "Temporary gas supply cut in Zone B Block 3. Repair work ongoing.",
                date(2024, 2, 4),
                NoticeKind::Urgent,
            ),
        ],
        balance: BalanceSummary {
            amount: "2 Cylinders".to_string(),
            valid_until: "Next Booking: Feb 20".to_string(),
            last_payment: Some(Payment {
                amount: "₹1,103.00".to_string(),
                date: "Jan 15, 2024".to_string(),
            }),
        },
        works: Vec::new(),
    }
}

fn municipal() -> DepartmentProfile {
    DepartmentProfile {
        department: Department::Municipal,
        tagline: "Access civic services, track development work, and file complaints",
        issue_types: [
            "Garbage Collection",
            "Water Supply",
            "Drainage/Sewage",
            "Road Repair",
            "Street Lights",
            "Parks & Gardens",
            "Property Tax",
            "Birth/Death Certificate",
            "Building Permission",
            "Other",
        ]
        .map(String::from)
        .to_vec(),
        personnel: vec![
            contact("Dr. Anita Desai", "Municipal Commissioner", "9876543230", "City Wide"),
            contact("Karan Malhotra", "Ward Officer - Ward 5", "9876543231", "Ward 5"),
            contact("Sunita Verma", "Sanitation Supervisor", "9876543232", "Ward 5-8"),
            contact("Ramesh Yadav", "Water Supply Engineer", "9876543233", "All Wards"),
        ],
        notices: vec![
            notice(
                "Water Supply Timing Change",
                "From Feb 10, water supply will be available 6 AM - 10 AM and 5 PM - 7 PM in Wards 3-8",
                date(2024, 2, 8),
                NoticeKind::Warning,
            ),
            notice(
                "Road Work - Main Street",
                "Main Street near City Center will be closed for resurfacing from Feb 12-20. Use alternative routes.",
                date(2024, 2, 7),
                NoticeKind::Info,
            ),
            notice(
                "Garbage Collection Drive",
                "Special waste collection drive on Feb 15. Keep segregated waste ready by 8 AM.",
                date(2024, 2, 5),
                NoticeKind::Info,
            ),
        ],
        balance: BalanceSummary {
            amount: "₹12,500.00".to_string(),
            valid_until: "Due: March 31, 2024".to_string(),
            last_payment: Some(Payment {
                amount: "₹8,500.00".to_string(),
                date: "Apr 1, 2023".to_string(),
            }),
        },
        works: vec![
            WorkProgress {
                title: "Main Road Resurfacing".to_string(),
                area: "Sector 12-15, Main Street".to_string(),
                start_date: date(2024, 1, 15),
                expected_completion: date(2024, 2, 28),
                progress_pct: 65,
                track: WorkTrack::OnTrack,
            },
            WorkProgress {
                title: "Water Pipeline Replacement".to_string(),
                area: "Ward 7, Block A-D".to_string(),
                start_date: date(2024, 2, 1),
                expected_completion: date(2024, 3, 15),
                progress_pct: 25,
                track: WorkTrack::OnTrack,
            },
            WorkProgress {
                title: "Community Park Development".to_string(),
                area: "Sector 18, Central Park".to_string(),
                start_date: date(2023, 12, 1),
                expected_completion: date(2024, 2, 20),
                progress_pct: 85,
                track: WorkTrack::Ahead,
            },
            WorkProgress {
                title: "Drainage System Upgrade".to_string(),
                area: "Ward 3-4".to_string(),
                start_date: date(2024, 1, 20),
                expected_completion: date(2024, 3, 30),
                progress_pct: 15,
                track: WorkTrack::Delayed,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_department_has_issue_types_and_notices() {
        for dept in Department::ALL {
            let profile = department_profile(dept);
            assert!(!profile.issue_types.is_empty());
            assert!(!profile.personnel.is_empty());
            assert!(!profile.notices.is_empty());
        }
    }

    #[test]
    fn recent_notices_caps_at_two() {
        let profile = department_profile(Department::Electricity);
        assert_eq!(profile.recent_notices().len(), 2);
        assert_eq!(profile.recent_notices()[0].title, "Scheduled Power Cut");
    }

    #[test]
    fn only_municipal_tracks_works() {
        assert!(department_profile(Department::Electricity).works.is_empty());
        assert!(department_profile(Department::Gas).works.is_empty());
        assert_eq!(department_profile(Department::Municipal).works.len(), 4);
    }
}
