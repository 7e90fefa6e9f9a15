/// Data structures for the host tab API
use serde::{Deserialize, Serialize};

/// The fields of a browser tab the popup needs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabInfo {
    pub id: i32,
    /// Absent when the extension may not read the tab URL
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_host_tab() {
        let json = r#"{
            "active": true,
            "audible": false,
            "id": 1234,
            "index": 3,
            "pinned": false,
            "status": "complete",
            "title": "Search results",
            "url": "https://search.example.com/s/search.html?collection=web&profile=foo",
            "windowId": 1
        }"#;

        let tab: TabInfo = serde_json::from_str(json).unwrap();

        assert_eq!(tab.id, 1234);
        assert_eq!(tab.url, "https://search.example.com/s/search.html?collection=web&profile=foo");
    }

    #[test]
    fn test_deserialize_tab_without_url() {
        let tab: TabInfo = serde_json::from_str(r#"{"id": 5, "title": "New Tab"}"#).unwrap();

        assert_eq!(tab.url, "");
    }
}
