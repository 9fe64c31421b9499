//! OUI registry index
//!
//! Turns the IEEE OUI registry text dump into an immutable mapping from a
//! 24-bit vendor prefix to the registered organization name(s), and
//! answers vendor-lookup queries for arbitrary hardware addresses.
//!
//! The registry text is loosely structured prose with one strict marker:
//! only the `(base 16)` lines carry an assignment. A typical block:
//!
//! ```text
//! 28-6F-B9   (hex)		Nokia Shanghai Bell Co., Ltd.
//! 286FB9     (base 16)		Nokia Shanghai Bell Co., Ltd.
//! 				No.388 Ning Qiao Road
//! 				Shanghai  201206
//! 				CN
//! ```
//!
//! Acquiring the text (download, cache file) is the caller's business;
//! this module performs no I/O.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::info;

use arpsniffer_core::{vendor_tags, MacAddr};

/// Marker identifying an assignment line: five spaces, the base-16 token,
/// two tabs. Every other line in the dump is noise.
const BASE16_MARKER: &str = "     (base 16)\t\t";

/// Separator joining organization names when the registry lists more than
/// one under the same prefix. Part of the observable output.
const NAME_SEPARATOR: &str = ", also ";

/// Immutable vendor-prefix index built from IEEE OUI registry text
///
/// Built once, then queried read-only: lookups borrow from the frozen map
/// and are safe to run from any number of threads without locking.
#[derive(Debug, Clone, Default)]
pub struct OuiRegistry {
    orgs: HashMap<String, String>,
}

impl OuiRegistry {
    /// Build an index from a sequence of registry lines
    ///
    /// Lines without the assignment marker are skipped silently. When a
    /// prefix appears more than once, the organization names accumulate in
    /// input order, joined with `", also "`.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut orgs: HashMap<String, String> = HashMap::new();

        for line in lines {
            let line = line.as_ref();
            if !line.contains(BASE16_MARKER) {
                continue;
            }

            let prefix = line.split(' ').next().unwrap_or("");
            let org = match line.split("\t\t").nth(1) {
                Some(org) => org,
                None => continue,
            };

            match orgs.entry(prefix.to_string()) {
                Entry::Occupied(mut slot) => {
                    let joined = slot.get_mut();
                    joined.push_str(NAME_SEPARATOR);
                    joined.push_str(org);
                }
                Entry::Vacant(slot) => {
                    slot.insert(org.to_string());
                }
            }
        }

        info!("Loaded {} OUI prefixes from registry text", orgs.len());

        Self { orgs }
    }

    /// Build an index from a whole registry dump
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Resolve a hardware address to a vendor display string
    ///
    /// The reserved values are checked before any index access, in this
    /// order: no address at all yields `"<null>"`, the all-zero address
    /// `"<empty>"`, the all-ones address `"<broadcast>"`. Everything else
    /// is looked up by vendor prefix; a miss yields `"<Unknown_Vendor>"`.
    pub fn lookup(&self, addr: Option<MacAddr>) -> &str {
        let addr = match addr {
            Some(addr) => addr,
            None => return vendor_tags::NULL,
        };

        if addr.is_zero() {
            vendor_tags::EMPTY
        } else if addr.is_broadcast() {
            vendor_tags::BROADCAST
        } else {
            self.orgs
                .get(addr.oui_hex().as_str())
                .map(String::as_str)
                .unwrap_or(vendor_tags::UNKNOWN)
        }
    }

    /// Raw access by prefix key (6 hex characters, case as found in the
    /// registry source)
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.orgs.get(prefix).map(String::as_str)
    }

    /// Number of distinct prefixes in the index
    pub fn len(&self) -> usize {
        self.orgs.len()
    }

    /// Check if the index holds no prefixes
    pub fn is_empty(&self) -> bool {
        self.orgs.is_empty()
    }
}
