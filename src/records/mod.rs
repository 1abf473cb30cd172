use serde::{Deserialize, Serialize};

pub mod export;
pub mod grid;

pub use export::{export_to_file, render_csv, CsvQuoting};
pub use grid::{GridView, SortDirection, SortState};

/// Contact endpoints nested under each record.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Devices {
    pub phone: String,
    pub voicemail: String,
}

/// One call/voicemail event as returned by the records endpoint.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "originationTime")]
    pub origination_time: String,
    #[serde(rename = "clusterId")]
    pub cluster_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub devices: Devices,
}

/// Fixed column schema shared by the table and the CSV export.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Column {
    Id,
    OriginationTime,
    ClusterId,
    UserId,
    Phone,
    Voicemail,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Id,
        Column::OriginationTime,
        Column::ClusterId,
        Column::UserId,
        Column::Phone,
        Column::Voicemail,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::OriginationTime => "Origination Time",
            Column::ClusterId => "Cluster ID",
            Column::UserId => "User ID",
            Column::Phone => "Phone",
            Column::Voicemail => "Voicemail",
        }
    }

    pub fn csv_header(self) -> &'static str {
        match self {
            Column::Id => "_id",
            Column::OriginationTime => "originationTime",
            Column::ClusterId => "clusterId",
            Column::UserId => "userId",
            Column::Phone => "phone",
            Column::Voicemail => "voicemail",
        }
    }

    pub fn value(self, record: &Record) -> &str {
        match self {
            Column::Id => &record.id,
            Column::OriginationTime => &record.origination_time,
            Column::ClusterId => &record.cluster_id,
            Column::UserId => &record.user_id,
            Column::Phone => &record.devices.phone,
            Column::Voicemail => &record.devices.voicemail,
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_field_names() {
        let json = r#"{
            "_id": "65a1",
            "originationTime": "2024-01-02T10:00:00Z",
            "clusterId": "c-7",
            "userId": "u-42",
            "devices": { "phone": "5551234", "voicemail": "5559999" }
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "65a1");
        assert_eq!(Column::Phone.value(&record), "5551234");
        assert_eq!(Column::Voicemail.value(&record), "5559999");
    }

    #[test]
    fn rejects_record_without_devices() {
        let json = r#"{"_id":"1","originationTime":"t","clusterId":"c","userId":"u"}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }
}
