use serde::{Deserialize, Serialize};

/// Closed set of service states shared with UI consumers. The numeric values
/// are part of the API and must not be reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceStatus {
    Active = 1,
    Stopped = 2,
    Error = 3,
    Starting = 4,
    Stopping = 5,
    NotInstalled = 6,
    NotActive = 7,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct StatusOption {
    pub value: u8,
    pub label: String,
}

impl ServiceStatus {
    pub const ALL: [ServiceStatus; 7] = [
        ServiceStatus::Active,
        ServiceStatus::Stopped,
        ServiceStatus::Error,
        ServiceStatus::Starting,
        ServiceStatus::Stopping,
        ServiceStatus::NotInstalled,
        ServiceStatus::NotActive,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceStatus::Active => "Active",
            ServiceStatus::Stopped => "Stopped",
            ServiceStatus::Error => "Error",
            ServiceStatus::Starting => "Starting",
            ServiceStatus::Stopping => "Stopping",
            ServiceStatus::NotInstalled => "Not Installed",
            ServiceStatus::NotActive => "Not Active",
        }
    }

    pub fn from_value(value: u8) -> Option<ServiceStatus> {
        ServiceStatus::ALL.iter().copied().find(|s| s.value() == value)
    }

    pub fn options() -> Vec<StatusOption> {
        ServiceStatus::ALL
            .iter()
            .map(|s| StatusOption {
                value: s.value(),
                label: s.label().to_string(),
            })
            .collect()
    }

    pub fn values() -> Vec<u8> {
        ServiceStatus::ALL.iter().map(|s| s.value()).collect()
    }

    pub fn labels() -> Vec<&'static str> {
        ServiceStatus::ALL.iter().map(|s| s.label()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::ServiceStatus;

    #[test]
    fn label_lookup() {
        assert_eq!(ServiceStatus::Active.label(), "Active");
        assert_eq!(ServiceStatus::NotInstalled.label(), "Not Installed");
    }

    #[test]
    fn value_round_trip() {
        for status in ServiceStatus::ALL {
            assert_eq!(ServiceStatus::from_value(status.value()), Some(status));
        }
    }

    #[test]
    fn unknown_value_has_no_status() {
        assert_eq!(ServiceStatus::from_value(0), None);
        assert_eq!(ServiceStatus::from_value(99), None);
    }

    #[test]
    fn options_cover_the_full_set() {
        let options = ServiceStatus::options();
        assert_eq!(options.len(), 7);
        assert_eq!(options[0].value, 1);
        assert_eq!(options[0].label, "Active");
        assert_eq!(ServiceStatus::values(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(ServiceStatus::labels().contains(&"Not Active"));
    }
}
