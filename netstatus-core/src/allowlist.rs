use std::sync::Mutex;

/// In-memory allow-list of SSIDs the operator trusts.
///
/// Lives for the life of the process and is handed to request handlers as
/// shared state instead of sitting in a global. The interior mutex makes
/// concurrent handler access safe; insertion order is preserved.
///
/// Empty-list policy: nothing is authorized until something has been added.
#[derive(Debug, Default)]
pub struct AllowList {
    ssids: Mutex<Vec<String>>,
}

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an SSID. Adding a name that is already present keeps a single
    /// entry; returns whether the list changed.
    pub fn add(&self, ssid: &str) -> bool {
        let mut ssids = self.ssids.lock().unwrap();
        if ssids.iter().any(|s| s == ssid) {
            return false;
        }
        ssids.push(ssid.to_string());
        true
    }

    /// Removes an SSID; returns whether it was present.
    pub fn remove(&self, ssid: &str) -> bool {
        let mut ssids = self.ssids.lock().unwrap();
        let before = ssids.len();
        ssids.retain(|s| s != ssid);
        ssids.len() != before
    }

    pub fn contains(&self, ssid: &str) -> bool {
        self.ssids.lock().unwrap().iter().any(|s| s == ssid)
    }

    pub fn is_empty(&self) -> bool {
        self.ssids.lock().unwrap().is_empty()
    }

    /// The entries in insertion order.
    pub fn entries(&self) -> Vec<String> {
        self.ssids.lock().unwrap().clone()
    }

    /// True only when the list is non-empty and names `current`.
    pub fn is_current_authorized(&self, current: &str) -> bool {
        let ssids = self.ssids.lock().unwrap();
        !ssids.is_empty() && ssids.iter().any(|s| s == current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_remove_round_trip() {
        let list = AllowList::new();
        assert!(list.add("HomeNet"));
        assert!(list.contains("HomeNet"));
        assert!(list.remove("HomeNet"));
        assert!(!list.contains("HomeNet"));
    }

    #[test]
    fn adding_twice_keeps_one_entry() {
        let list = AllowList::new();
        assert!(list.add("HomeNet"));
        assert!(!list.add("HomeNet"));
        assert_eq!(list.entries(), vec!["HomeNet".to_string()]);
    }

    #[test]
    fn an_empty_list_authorizes_nothing() {
        let list = AllowList::new();
        assert!(!list.is_current_authorized("HomeNet"));
    }

    #[test]
    fn only_listed_networks_are_authorized() {
        let list = AllowList::new();
        list.add("HomeNet");
        assert!(list.is_current_authorized("HomeNet"));
        assert!(!list.is_current_authorized("CafeGuest"));
        assert!(!list.is_current_authorized("Unknown"));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let list = AllowList::new();
        list.add("B-Net");
        list.add("A-Net");
        assert_eq!(list.entries(), vec!["B-Net".to_string(), "A-Net".to_string()]);
    }
}
